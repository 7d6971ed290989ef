use crate::core::{DebugRange, ScrollPan};
use crate::dom::Listener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const PANEL_STYLE: &str = "position:fixed;top:0;right:16px;z-index:1000;color:#eee;font:11px monospace;background:#1a1a1a;padding:6px 8px;display:flex;gap:6px;align-items:center";

/// Development aid: a slider for the gallery camera x. Moving it re-seats the
/// pan position inside `range`; scrolling keeps working from there.
pub struct DebugPanel {
    root: web::Element,
    _input: Listener,
}

impl DebugPanel {
    pub fn mount(
        document: &web::Document,
        range: DebugRange,
        pan: Rc<RefCell<ScrollPan>>,
    ) -> anyhow::Result<Self> {
        let err = |e: wasm_bindgen::JsValue| anyhow::anyhow!("debug panel: {:?}", e);
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("debug panel: no body"))?;
        let root = document.create_element("div").map_err(err)?;
        _ = root.set_attribute("style", PANEL_STYLE);
        root.set_class_name("debug-panel");

        let label = document.create_element("span").map_err(err)?;
        label.set_text_content(Some("x"));
        let input: web::HtmlInputElement = document
            .create_element("input")
            .map_err(err)?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("debug panel: {:?}", e))?;
        input.set_type("range");
        input.set_min(&range.min.to_string());
        input.set_max(&range.max.to_string());
        input.set_step("0.01");
        input.set_value(&range.clamp(pan.borrow().position).to_string());

        _ = root.append_child(&label);
        _ = root.append_child(&input);
        _ = body.append_child(&root);

        let input_c = input.clone();
        let listener = Listener::new(&input, "input", move |_| {
            if let Ok(x) = input_c.value().parse::<f32>() {
                pan.borrow_mut().seat(range.clamp(x));
            }
        });
        log::debug!("[debug] panel mounted range=[{}, {}]", range.min, range.max);
        Ok(Self {
            root,
            _input: listener,
        })
    }
}

impl Drop for DebugPanel {
    fn drop(&mut self) {
        self.root.remove();
    }
}
