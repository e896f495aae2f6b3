//! The DOM seam.
//!
//! [`crate::highlight`] only talks to the page through [`Dom`], so the upsert and
//! removal rules can be tested natively against the in-memory test backend and
//! run in the browser against [`crate::web::WebDom`].

use crate::error::MarkError;

pub use crate::scroll::PageMetrics;

/// The handful of DOM calls the highlight helpers need.
pub trait Dom {
    /// Handle to an element owned by the page.
    type Element: Clone;

    /// Look up a connected element by id (`document.getElementById`).
    ///
    /// # Errors
    ///
    /// Returns `Err` if the lookup itself fails.
    fn element_by_id(&self, id: &str) -> Result<Option<Self::Element>, MarkError>;

    /// Create a detached element (`document.createElement`).
    ///
    /// # Errors
    ///
    /// Returns `Err` if the tag is rejected by the page.
    fn create_element(&self, tag: &str) -> Result<Self::Element, MarkError>;

    /// # Errors
    ///
    /// Returns `Err` if the element is unknown to the backend.
    fn set_id(&self, el: &Self::Element, id: &str) -> Result<(), MarkError>;

    /// Set one inline style property (`el.style.setProperty`), using CSS property names.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the property cannot be set.
    fn set_style(&self, el: &Self::Element, property: &str, value: &str) -> Result<(), MarkError>;

    /// # Errors
    ///
    /// Returns `Err` if the element is unknown to the backend.
    fn set_text(&self, el: &Self::Element, text: &str) -> Result<(), MarkError>;

    /// Append to `document.body`, moving the element if it is already attached.
    ///
    /// # Errors
    ///
    /// Returns [`MarkError::NoBody`] when the page has no body yet.
    fn append_to_body(&self, el: &Self::Element) -> Result<(), MarkError>;

    /// Append to `document.head`, falling back to the body when there is no head.
    ///
    /// # Errors
    ///
    /// Returns `Err` if neither head nor body exists.
    fn append_to_head(&self, el: &Self::Element) -> Result<(), MarkError>;

    /// Detach the element. Detaching an already detached element does nothing.
    fn remove(&self, el: &Self::Element);

    /// Read content and viewport sizes.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the page has no body or the viewport size is unreadable.
    fn metrics(&self) -> Result<PageMetrics, MarkError>;
}
