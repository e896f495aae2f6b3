//! `wasm-bindgen` exports called by the automation harness.
//!
//! Each export binds a fresh [`WebDom`] to the current page, runs one
//! [`Highlighter`] operation with the installed [`MarkerConfig`], and turns any
//! [`MarkError`] into a thrown JS `Error`.

use std::cell::RefCell;

use log::{Level, debug, info};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::config::MarkerConfig;
use crate::consts::NO_SELECT_CSS;
use crate::error::MarkError;
use crate::geom::{BBox, DeviceSize, Direction, Point};
use crate::highlight::Highlighter;
use crate::style;
use crate::web::WebDom;

thread_local! {
    static CONFIG: RefCell<MarkerConfig> = RefCell::new(MarkerConfig::default());
}

fn current_config() -> MarkerConfig {
    CONFIG.with(|config| config.borrow().clone())
}

fn highlighter() -> Result<Highlighter<WebDom>, MarkError> {
    Ok(Highlighter::new(WebDom::from_window()?, current_config()))
}

/// Install console logging and the panic hook. Runs when the module is instantiated.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(Level::Trace) {
        debug!("console logger already installed: {err}");
    }
    log::set_max_level(current_config().log_level);
    info!("pagemark {} loaded", env!("CARGO_PKG_VERSION"));
}

/// Replace the active configuration with `json` (missing fields take defaults).
///
/// Existing overlay/marker elements keep their old id and appearance; remove them
/// first when changing ids.
///
/// # Errors
///
/// Throws if `json` is malformed or fails validation; the previous config stays active.
#[wasm_bindgen]
pub fn configure(json: &str) -> Result<(), JsValue> {
    let config = MarkerConfig::from_json(json)?;
    log::set_max_level(config.log_level);
    info!("config updated: overlay=#{} marker=#{}", config.overlay_id, config.marker_id);
    CONFIG.with(|current| *current.borrow_mut() = config);
    Ok(())
}

// --- Overlay ---

/// # Errors
///
/// Throws unless `bbox` is four finite numbers `[x1, y1, x2, y2]` and the page has a body.
#[wasm_bindgen]
pub fn add_highlight_element(bbox: Vec<f64>) -> Result<HtmlElement, JsValue> {
    let bbox = BBox::from_slice(&bbox)?;
    Ok(highlighter()?.add_highlight_element(bbox)?)
}

/// # Errors
///
/// Throws only outside a page context.
#[wasm_bindgen]
pub fn remove_highlight_element() -> Result<(), JsValue> {
    highlighter()?.remove_highlight_element()?;
    Ok(())
}

// --- Marker ---

/// # Errors
///
/// Throws unless `point` is two finite numbers `[x, y]` and the page has a body.
#[wasm_bindgen]
pub fn add_highlight_position(point: Vec<f64>) -> Result<HtmlElement, JsValue> {
    let point = Point::from_slice(&point)?;
    Ok(highlighter()?.add_highlight_position(point)?)
}

/// # Errors
///
/// Throws only outside a page context.
#[wasm_bindgen]
pub fn remove_highlight_position() -> Result<(), JsValue> {
    highlighter()?.remove_highlight_position()?;
    Ok(())
}

// --- Scrollbars ---

/// # Errors
///
/// Throws if the page has no body.
#[wasm_bindgen]
pub fn has_vertical_scrollbar() -> Result<bool, JsValue> {
    Ok(highlighter()?.has_vertical_scrollbar()?)
}

/// # Errors
///
/// Throws if the page has no body.
#[wasm_bindgen]
pub fn has_horizontal_scrollbar() -> Result<bool, JsValue> {
    Ok(highlighter()?.has_horizontal_scrollbar()?)
}

/// `top`/`bottom` check the vertical axis, `left`/`right` the horizontal one.
///
/// # Errors
///
/// Throws on an unknown direction or if the page has no body.
#[wasm_bindgen]
pub fn has_scrollbar(direction: &str) -> Result<bool, JsValue> {
    let direction: Direction = direction.parse()?;
    Ok(highlighter()?.has_scrollbar(direction)?)
}

// --- Harness helpers ---

/// Plan a swipe and return it as JSON: `{"kind":"drag",...}` or `{"kind":"wheel",...}`.
///
/// # Errors
///
/// Throws on an unknown direction or if the page has no body.
#[wasm_bindgen]
pub fn plan_swipe(direction: &str, width: u32, height: u32, is_mobile: bool) -> Result<String, JsValue> {
    let direction: Direction = direction.parse()?;
    let gesture = highlighter()?.plan_swipe(direction, DeviceSize::new(width, height), is_mobile)?;
    Ok(serde_json::to_string(&gesture).map_err(MarkError::Encode)?)
}

/// Pixel point `[x, y]` inside a fractional bbox, optionally anchored toward one side.
///
/// # Errors
///
/// Throws on a malformed bbox, unknown anchor or non-finite offset.
#[wasm_bindgen]
pub fn coordinate(
    bbox: Vec<f64>,
    width: u32,
    height: u32,
    anchor: Option<String>,
    offset: Option<f64>,
) -> Result<Vec<i32>, JsValue> {
    let bbox = BBox::from_slice(&bbox)?;
    let anchor = anchor.as_deref().map(str::parse::<Direction>).transpose()?;
    let (x, y) = bbox.coordinate(DeviceSize::new(width, height), anchor, offset)?;
    Ok(vec![x, y])
}

/// # Errors
///
/// Throws if the stylesheet cannot be attached.
#[wasm_bindgen]
pub fn add_style(css: &str) -> Result<HtmlElement, JsValue> {
    Ok(highlighter()?.add_style(css)?)
}

/// # Errors
///
/// Throws only outside a page context.
#[wasm_bindgen]
pub fn remove_element(el: HtmlElement) -> Result<(), JsValue> {
    highlighter()?.remove_element(&el);
    Ok(())
}

#[must_use]
#[wasm_bindgen]
pub fn overlay_screenshot_css() -> String {
    style::overlay_screenshot_css(&current_config())
}

#[must_use]
#[wasm_bindgen]
pub fn no_select_css() -> String {
    NO_SELECT_CSS.to_owned()
}
