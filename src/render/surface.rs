//! Surfaces: the live page a render plan is applied to.

use crate::render::{Action, Node, RenderPlan, Selector};
use tracing::debug;

/// A mutable page, addressed through opaque element handles.
///
/// Implemented by the in-memory [`crate::dom::Document`] and, with the `web`
/// feature, by the browser DOM.
pub trait Surface {
    type Handle: Clone;

    /// First element matching `selector`, searched under `scope` or the whole page.
    fn query(&self, scope: Option<&Self::Handle>, selector: &Selector) -> Option<Self::Handle>;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, scope: Option<&Self::Handle>, selector: &Selector) -> Vec<Self::Handle>;

    fn attribute(&self, handle: &Self::Handle, name: &str) -> Option<String>;

    fn set_attribute(&mut self, handle: &Self::Handle, name: &str, value: &str);

    /// Replace all children of `handle` with a single text node.
    fn set_text(&mut self, handle: &Self::Handle, text: &str);

    /// Remove all children of `handle` and append `nodes`.
    fn replace_children(&mut self, handle: &Self::Handle, nodes: &[Node]);

    fn add_classes(&mut self, handle: &Self::Handle, classes: &[&str]);

    fn remove_classes(&mut self, handle: &Self::Handle, classes: &[&str]);

    fn set_title(&mut self, title: &str);

    /// Set the `lang` attribute of the document element.
    fn set_document_language(&mut self, code: &str);
}

/// Regions painted and regions skipped by one [`apply_plan`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub applied: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
}

/// Paint `plan` onto `surface`.
///
/// A region whose root is absent is skipped, and so is any update whose
/// nested target is absent. The title is set after all regions.
pub fn apply_plan<S: Surface>(surface: &mut S, plan: &RenderPlan) -> ApplyReport {
    let mut report = ApplyReport::default();

    for region in &plan.regions {
        let Some(root) = surface.query(None, &region.root) else {
            debug!("Region '{}' not on page, skipping", region.name);
            report.skipped.push(region.name);
            continue;
        };

        for update in &region.updates {
            let target = match &update.target {
                None => Some(root.clone()),
                Some(selector) => surface.query(Some(&root), selector),
            };
            let Some(target) = target else {
                continue;
            };

            match &update.action {
                Action::Text(text) => surface.set_text(&target, text),
                Action::Children(nodes) => surface.replace_children(&target, nodes),
                Action::SetAttribute { name, value } => surface.set_attribute(&target, name, value),
            }
        }

        report.applied.push(region.name);
    }

    surface.set_title(&plan.title);
    report
}
