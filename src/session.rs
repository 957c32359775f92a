//! Browser session driver over `headless_chrome`.
//!
//! Owns the Chrome process and one tab for the whole run. The rest of the
//! crate never touches a live DOM handle: `image_attrs` copies the attribute
//! values out while the element list is fresh and returns plain data.

use anyhow::{bail, Context, Result};
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::ffi::OsStr;
use std::sync::Arc;
use std::time::Duration;

use crate::extract::ImageAttrs;

pub struct Session {
    // Kept alive so the Chrome process outlives the tab; closed on drop.
    _browser: Browser,
    tab: Arc<Tab>,
}

impl Session {
    /// Launches Chrome (maximized) and opens the tab used for the whole run.
    pub fn launch(headless: bool) -> Result<Self> {
        let browser = Browser::new(LaunchOptions {
            headless,
            args: vec![OsStr::new("--start-maximized")],
            ..Default::default()
        })
        .context("launching Chrome")?;
        let tab = browser.new_tab().context("opening tab")?;
        Ok(Self {
            _browser: browser,
            tab,
        })
    }

    /// Navigates and blocks until the page load completes.
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .and_then(|t| t.wait_until_navigated())
            .with_context(|| format!("navigating to {}", url))?;
        Ok(())
    }

    /// Blocks until an element matching `selector` appears.
    pub fn wait_for(&self, selector: &str) -> Result<()> {
        self.tab
            .wait_for_element(selector)
            .with_context(|| format!("waiting for {}", selector))?;
        Ok(())
    }

    /// Plain sleep; the listing populates its grid a beat after load.
    pub fn settle(&self, pause: Duration) {
        std::thread::sleep(pause);
    }

    /// Selects the `<option>` whose visible label matches `label` and fires a
    /// change event, the same as a user picking it from the dropdown. Both
    /// arguments are escaped before being embedded in the evaluated JS.
    pub fn select_by_label(&self, selector: &str, label: &str) -> Result<()> {
        let js = format!(
            r#"(() => {{
                const sel = document.querySelector("{selector}");
                if (!sel) return false;
                const opt = Array.from(sel.options)
                    .find(o => o.textContent.trim() === "{label}");
                if (!opt) return false;
                sel.value = opt.value;
                sel.dispatchEvent(new Event("change", {{ bubbles: true }}));
                return true;
            }})()"#,
            selector = js_quote(selector),
            label = js_quote(label),
        );
        let result = self
            .tab
            .evaluate(&js, false)
            .with_context(|| format!("selecting option in {}", selector))?;
        let selected = result.value.as_ref().and_then(|v| v.as_bool()).unwrap_or(false);
        if !selected {
            bail!("option {:?} not found in {}", label, selector);
        }
        Ok(())
    }

    /// Queries every element matching `selector` and copies out the image
    /// attributes, in document order. Handles are dropped before returning.
    pub fn image_attrs(&self, selector: &str) -> Result<Vec<ImageAttrs>> {
        let elements = self
            .tab
            .find_elements(selector)
            .with_context(|| format!("querying {}", selector))?;
        let mut out = Vec::with_capacity(elements.len());
        for element in &elements {
            let pairs = element.get_attributes()?.unwrap_or_default();
            out.push(attrs_from_pairs(&pairs));
        }
        Ok(out)
    }
}

/// Escapes a value for embedding inside a double-quoted JS string literal.
fn js_quote(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Builds [`ImageAttrs`] from the flattened name/value pair list the DevTools
/// protocol returns for a node's attributes.
fn attrs_from_pairs(pairs: &[String]) -> ImageAttrs {
    let mut attrs = ImageAttrs::default();
    for pair in pairs.chunks_exact(2) {
        match pair[0].as_str() {
            "src" => attrs.src = Some(pair[1].clone()),
            "data-src" => attrs.data_src = Some(pair[1].clone()),
            "srcset" => attrs.srcset = Some(pair[1].clone()),
            "data-srcset" => attrs.data_srcset = Some(pair[1].clone()),
            _ => {}
        }
    }
    attrs
}
