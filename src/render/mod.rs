//! Rendering pipeline.
//!
//! - `node`: element trees and attribute selectors
//! - `plan`: pure (language, content) → `RenderPlan`
//! - `surface`: the `Surface` trait and `apply_plan`, the only step that mutates a page

mod node;
mod plan;
mod surface;

pub use node::{Element, Node, Selector};
pub use plan::{
    blog_post_href, format_experience, tech_item_text, Action, Region, RenderPlan, Update,
};
pub use surface::{apply_plan, ApplyReport, Surface};
