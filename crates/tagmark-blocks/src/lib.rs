//! Built-in block renderers for tagmark documents.
//!
//! | Block | Kind |
//! |---|---|
//! | `alert` | wrapping |
//! | `card` | wrapping |
//! | `quote` | wrapping |
//! | `practice` | wrapping |
//! | `accordion` | wrapping |
//! | `progress` | self-closing or wrapping |
//! | `hero` | wrapping |
//! | `div`, `section`, `article`, `aside`, `header`, `footer`, `nav`, `main` | wrapping |
//! | `hr`, `br` | self-closing |
//!
//! Fragments never contain blank lines, so the outer markdown pass sees each
//! one as a single raw HTML block.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tagmark_expand::{ExpandOptions, ExpansionEngine, NullSink, RegistryBuilder};
//!
//! let mut builder = RegistryBuilder::new();
//! tagmark_blocks::register_builtins(&mut builder).unwrap();
//! let engine = ExpansionEngine::new(Arc::new(builder.freeze())).with_sink(Arc::new(NullSink));
//!
//! let out = engine
//!     .expand("{~ alert type=\"warning\" ~}Careful{~~}", &ExpandOptions::default())
//!     .unwrap();
//! assert!(out.contains("<div class=\"sb-alert sb-alert-warning\" role=\"alert\">"));
//! ```

use std::sync::Arc;

use tagmark_expand::{BlockRenderer, RegistrationError, RegistryBuilder};

mod accordion;
mod alert;
mod card;
mod element;
mod hero;
mod html;
mod practice;
mod progress;
mod quote;

pub use accordion::AccordionBlock;
pub use alert::AlertBlock;
pub use card::CardBlock;
pub use element::{CONTAINER_TAGS, HtmlElement, VOID_TAGS};
pub use hero::HeroBlock;
pub use practice::PracticeBlock;
pub use progress::ProgressBlock;
pub use quote::QuoteBlock;

/// All built-in renderers.
pub fn builtin_renderers() -> Vec<Arc<dyn BlockRenderer>> {
    let mut renderers: Vec<Arc<dyn BlockRenderer>> = vec![
        Arc::new(AlertBlock),
        Arc::new(CardBlock),
        Arc::new(QuoteBlock),
        Arc::new(PracticeBlock),
        Arc::new(AccordionBlock),
        Arc::new(ProgressBlock),
        Arc::new(HeroBlock),
    ];
    renderers.extend(HtmlElement::all().map(|e| Arc::new(e) as Arc<dyn BlockRenderer>));
    renderers
}

/// Register every built-in renderer.
///
/// Fails if the builder already holds a block with a built-in name.
pub fn register_builtins(builder: &mut RegistryBuilder) -> Result<(), RegistrationError> {
    for renderer in builtin_renderers() {
        builder.register_renderer(renderer)?;
    }
    Ok(())
}
