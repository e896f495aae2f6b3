//! Overlay and marker helpers over any [`Dom`] backend.
//!
//! Both visual elements are singletons keyed by a fixed element id: the first
//! call creates and styles the element, later calls find it again and only move
//! it. Removal is a no-op when the element is absent, so repeated removal is safe.

use log::debug;

use crate::config::MarkerConfig;
use crate::dom::Dom;
use crate::error::MarkError;
use crate::geom::{BBox, DeviceSize, Direction, Point};
use crate::gesture::{self, Gesture};
use crate::scroll::Axis;
use crate::style::{self, Declaration};

#[cfg(test)]
#[path = "highlight_test.rs"]
mod highlight_test;

pub struct Highlighter<D: Dom> {
    dom: D,
    config: MarkerConfig,
}

impl<D: Dom> Highlighter<D> {
    #[must_use]
    pub fn new(dom: D, config: MarkerConfig) -> Self {
        Self { dom, config }
    }

    #[must_use]
    pub fn dom(&self) -> &D {
        &self.dom
    }

    #[must_use]
    pub fn config(&self) -> &MarkerConfig {
        &self.config
    }

    // --- Overlay ---

    /// Outline `bbox` with the overlay, creating it on first use.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the overlay cannot be created, styled or attached.
    pub fn add_highlight_element(&self, bbox: BBox) -> Result<D::Element, MarkError> {
        let el = self.upsert(&self.config.overlay_id, &style::overlay_base(&self.config))?;
        self.apply(&el, &style::overlay_placement(bbox))?;
        Ok(el)
    }

    /// Remove the overlay. Returns whether one was present.
    ///
    /// # Errors
    ///
    /// Returns `Err` only if the id lookup fails.
    pub fn remove_highlight_element(&self) -> Result<bool, MarkError> {
        self.remove_by_id(&self.config.overlay_id)
    }

    // --- Marker ---

    /// Center the marker on `point`, creating it on first use.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the marker cannot be created, styled or attached.
    pub fn add_highlight_position(&self, point: Point) -> Result<D::Element, MarkError> {
        let el = self.upsert(&self.config.marker_id, &style::marker_base(&self.config))?;
        self.apply(&el, &style::marker_placement(point))?;
        Ok(el)
    }

    /// Remove the marker. Returns whether one was present.
    ///
    /// # Errors
    ///
    /// Returns `Err` only if the id lookup fails.
    pub fn remove_highlight_position(&self) -> Result<bool, MarkError> {
        self.remove_by_id(&self.config.marker_id)
    }

    // --- Scrollbars ---

    /// # Errors
    ///
    /// Returns `Err` if page metrics cannot be read.
    pub fn has_vertical_scrollbar(&self) -> Result<bool, MarkError> {
        Ok(self.dom.metrics()?.overflows(Axis::Vertical))
    }

    /// # Errors
    ///
    /// Returns `Err` if page metrics cannot be read.
    pub fn has_horizontal_scrollbar(&self) -> Result<bool, MarkError> {
        Ok(self.dom.metrics()?.overflows(Axis::Horizontal))
    }

    /// Scrollbar check on the axis travelled toward `direction`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if page metrics cannot be read.
    pub fn has_scrollbar(&self, direction: Direction) -> Result<bool, MarkError> {
        match direction.axis() {
            Axis::Vertical => self.has_vertical_scrollbar(),
            Axis::Horizontal => self.has_horizontal_scrollbar(),
        }
    }

    /// Plan a swipe toward `direction`, checking the page for a scrollbar on that axis.
    ///
    /// # Errors
    ///
    /// Returns `Err` if page metrics cannot be read.
    pub fn plan_swipe(&self, direction: Direction, device: DeviceSize, is_mobile: bool) -> Result<Gesture, MarkError> {
        let has_scrollbar = self.has_scrollbar(direction)?;
        let gesture = gesture::plan_swipe(direction, device, is_mobile, has_scrollbar);
        debug!("swipe {direction}: scrollbar={has_scrollbar} mobile={is_mobile} -> {gesture:?}");
        Ok(gesture)
    }

    // --- Generic elements ---

    /// Inject a stylesheet. The returned element can be passed to [`Self::remove_element`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the `<style>` element cannot be created or attached.
    pub fn add_style(&self, css: &str) -> Result<D::Element, MarkError> {
        let el = self.dom.create_element("style")?;
        self.dom.set_text(&el, css)?;
        self.dom.append_to_head(&el)?;
        debug!("injected stylesheet ({} bytes)", css.len());
        Ok(el)
    }

    pub fn remove_element(&self, el: &D::Element) {
        self.dom.remove(el);
    }

    // --- Internals ---

    fn upsert(&self, id: &str, base: &[Declaration]) -> Result<D::Element, MarkError> {
        if let Some(el) = self.dom.element_by_id(id)? {
            debug!("repositioning #{id}");
            return Ok(el);
        }
        let el = self.dom.create_element("div")?;
        self.dom.set_id(&el, id)?;
        self.apply(&el, base)?;
        self.dom.append_to_body(&el)?;
        debug!("created #{id}");
        Ok(el)
    }

    fn apply(&self, el: &D::Element, decls: &[Declaration]) -> Result<(), MarkError> {
        for (property, value) in decls {
            self.dom.set_style(el, property, value)?;
        }
        Ok(())
    }

    fn remove_by_id(&self, id: &str) -> Result<bool, MarkError> {
        match self.dom.element_by_id(id)? {
            Some(el) => {
                self.dom.remove(&el);
                debug!("removed #{id}");
                Ok(true)
            }
            None => {
                debug!("#{id} not present; nothing to remove");
                Ok(false)
            }
        }
    }
}
