//! TypeScript AST builders for the declarations the generator emits.
//!
//! Every node implements [`Renderable`] and can also be built to a string
//! on its own with `build()`.

mod consts;
mod enums;
mod imports;
mod interface;
mod types;

use gqlts_codegen::{CodeFragment, Renderable};

pub use consts::Const;
pub use enums::{Enum, EnumMember};
pub use imports::Import;
pub use interface::{Interface, Property, ResolverField};
pub use types::{TypeAlias, Union};

/// Leading doc comment fragment, if any.
fn doc_fragment(doc: &Option<String>) -> Option<CodeFragment> {
    doc.clone().and_then(CodeFragment::doc)
}

/// Render members in order, separating each documented member from the one
/// before it with a blank line.
fn member_fragments<M: Renderable>(members: &[M]) -> Vec<CodeFragment> {
    let mut body = Vec::new();
    for (index, member) in members.iter().enumerate() {
        let fragments = member.to_fragments();
        if index > 0 && matches!(fragments.first(), Some(CodeFragment::Doc(_))) {
            body.push(CodeFragment::Blank);
        }
        body.extend(fragments);
    }
    body
}
