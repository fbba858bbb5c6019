//! Browser bindings (`web` feature).
//!
//! [`WebSurface`] paints render plans onto the live DOM and [`LocalStorage`]
//! keeps the preference in `window.localStorage`. JavaScript calls
//! [`start`] once the page has loaded; it also routes `tracing` events to the
//! browser console.

use crate::client::I18nClient;
use crate::render::{Node, Selector, Surface};
use crate::storage::LanguageStorage;
use crate::switcher::LanguageSwitcher;
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use tracing::{warn, Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// The browser document as a render surface.
pub struct WebSurface {
    document: web_sys::Document,
}

impl WebSurface {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    fn build(&self, node: &Node) -> Result<web_sys::Node, JsValue> {
        match node {
            Node::Text(text) => Ok(self.document.create_text_node(text).into()),
            Node::Element(element) => {
                let el = self.document.create_element(&element.tag)?;
                for (name, value) in &element.attributes {
                    el.set_attribute(name, value)?;
                }
                for child in &element.children {
                    el.append_child(&self.build(child)?)?;
                }
                Ok(el.into())
            }
        }
    }
}

impl Surface for WebSurface {
    type Handle = web_sys::Element;

    fn query(&self, scope: Option<&web_sys::Element>, selector: &Selector) -> Option<web_sys::Element> {
        let css = selector.to_string();
        let found = match scope {
            Some(element) => element.query_selector(&css),
            None => self.document.query_selector(&css),
        };
        found.ok().flatten()
    }

    fn query_all(&self, scope: Option<&web_sys::Element>, selector: &Selector) -> Vec<web_sys::Element> {
        let css = selector.to_string();
        let list = match scope {
            Some(element) => element.query_selector_all(&css),
            None => self.document.query_selector_all(&css),
        };
        let Ok(list) = list else {
            return Vec::new();
        };

        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .collect()
    }

    fn attribute(&self, handle: &web_sys::Element, name: &str) -> Option<String> {
        handle.get_attribute(name)
    }

    fn set_attribute(&mut self, handle: &web_sys::Element, name: &str, value: &str) {
        if let Err(e) = handle.set_attribute(name, value) {
            warn!("Failed to set attribute {}: {:?}", name, e);
        }
    }

    fn set_text(&mut self, handle: &web_sys::Element, text: &str) {
        handle.set_text_content(Some(text));
    }

    fn replace_children(&mut self, handle: &web_sys::Element, nodes: &[Node]) {
        handle.set_text_content(None);
        for node in nodes {
            let appended = self
                .build(node)
                .and_then(|child| handle.append_child(&child));
            if let Err(e) = appended {
                warn!("Failed to insert node: {:?}", e);
            }
        }
    }

    fn add_classes(&mut self, handle: &web_sys::Element, classes: &[&str]) {
        let list = handle.class_list();
        for class in classes {
            let _ = list.add_1(class);
        }
    }

    fn remove_classes(&mut self, handle: &web_sys::Element, classes: &[&str]) {
        let list = handle.class_list();
        for class in classes {
            let _ = list.remove_1(class);
        }
    }

    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn set_document_language(&mut self, code: &str) {
        if let Some(root) = self.document.document_element() {
            self.set_attribute(&root, "lang", code);
        }
    }
}

/// `window.localStorage`, or nothing when storage is unavailable.
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn new(storage: Option<web_sys::Storage>) -> Self {
        Self { storage }
    }
}

impl LanguageStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            warn!("Failed to persist language: {:?}", e);
        }
    }
}

/// One formatted `tracing` event, sent to the console when dropped.
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }

    /// Buffered line without its trailing newline, leaving the buffer empty.
    fn take_line(&mut self) -> Option<String> {
        let bytes = std::mem::take(&mut self.buffer);
        let line = String::from_utf8_lossy(&bytes).trim_end().to_string();
        (!line.is_empty()).then_some(line)
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let Some(line) = self.take_line() else {
            return;
        };
        let message = JsValue::from_str(&line);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&message),
            Level::WARN => web_sys::console::warn_1(&message),
            _ => web_sys::console::log_1(&message),
        }
    }
}

/// `MakeWriter` for the browser console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Install the console subscriber; later calls keep the first one.
fn init_console_logging() {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        // No system clock on wasm32-unknown-unknown
        .without_time()
        .with_max_level(Level::INFO)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Localize the page and wire up the language switcher buttons.
#[wasm_bindgen]
pub fn start(base_path: String) -> Result<(), JsValue> {
    init_console_logging();

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    // Private browsing may deny storage; run without persistence then.
    let storage = window.local_storage().ok().flatten();
    let locale = window.navigator().language();

    let client = Rc::new(RefCell::new(I18nClient::new(
        WebSurface::new(document),
        LocalStorage::new(storage),
        base_path,
    )));

    let switcher = LanguageSwitcher::bind(&mut *client.borrow_mut(), locale.as_deref());
    let Some(switcher) = switcher else {
        return Ok(());
    };
    let switcher = Rc::new(switcher);

    for (index, button) in switcher.buttons().iter().enumerate() {
        let client = Rc::clone(&client);
        let switcher = Rc::clone(&switcher);
        let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            switcher.click(&mut *client.borrow_mut(), index);
        });
        button
            .handle
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        // Listeners live as long as the page.
        on_click.forget();
    }

    Ok(())
}
