//! Document pipeline: block expansion followed by markdown conversion.

use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;
use tagmark_config::{Config, ConfigError, ConfigOverrides};
use tagmark_expand::{
    DiagnosticsSink, ExpandError, ExpandOptions, ExpansionEngine, Registry, RegistryBuilder,
    RegistrationError,
};
use tagmark_markdown::{Extension, MarkdownConverter, TocEntry, UnknownExtension};

use crate::metrics::{reading_time_minutes, word_count};

/// Error building a [`Pipeline`].
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Registration(#[from] RegistrationError),
    #[error(transparent)]
    UnknownExtension(#[from] UnknownExtension),
    /// A disabled block names nothing that is registered.
    #[error("cannot disable block '{name}': no such block")]
    UnknownBlock { name: String },
}

/// A rendered document with the metadata collaborators need.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    /// Final HTML.
    pub html: String,
    /// Headings in document order.
    pub toc: Vec<TocEntry>,
    /// Whitespace-separated tokens in the source.
    pub word_count: usize,
    /// Estimated reading time, at least one minute.
    pub reading_time_minutes: usize,
}

/// Registry holding only the built-in blocks.
pub fn default_registry() -> Result<Arc<Registry>, RegistrationError> {
    let mut builder = RegistryBuilder::new();
    tagmark_blocks::register_builtins(&mut builder)?;
    Ok(Arc::new(builder.freeze()))
}

/// Expands block tags, then converts the result to HTML.
///
/// A pipeline is immutable once built and can render any number of documents,
/// concurrently via [`Pipeline::render_many`].
///
/// # Example
///
/// ```
/// use tagmark::Pipeline;
///
/// let pipeline = Pipeline::from_config(&tagmark::Config::default()).unwrap();
/// let doc = pipeline.render("# Setup\n\n{~ alert type=warning ~}Back up first.{~~}").unwrap();
///
/// assert!(doc.html.contains("<h1 id=\"setup\">Setup</h1>"));
/// assert!(doc.html.contains("sb-alert-warning"));
/// assert_eq!(doc.toc[0].title, "Setup");
/// ```
pub struct Pipeline {
    engine: ExpansionEngine,
    converter: MarkdownConverter,
    options: ExpandOptions,
}

impl Pipeline {
    /// Create a pipeline from its parts.
    pub fn new(registry: Arc<Registry>, converter: MarkdownConverter, options: ExpandOptions) -> Self {
        Self {
            engine: ExpansionEngine::new(registry),
            converter,
            options,
        }
    }

    /// Build a pipeline from configuration.
    ///
    /// Registers every built-in block except the disabled ones and enables the
    /// configured markdown extensions.
    pub fn from_config(config: &Config) -> Result<Self, PipelineError> {
        let extensions = config
            .markdown
            .extensions
            .iter()
            .map(|name| name.parse::<Extension>())
            .collect::<Result<Vec<_>, _>>()?;

        let mut builder = RegistryBuilder::new();
        tagmark_blocks::register_builtins(&mut builder)?;
        for name in &config.blocks.disabled {
            if !builder.unregister(name) {
                return Err(PipelineError::UnknownBlock { name: name.clone() });
            }
        }
        let registry = builder.freeze();

        tracing::debug!(
            blocks = registry.len(),
            extensions = extensions.len(),
            strict = config.expand.fail_on_error,
            "Built pipeline"
        );

        let options = ExpandOptions {
            fail_on_error: config.expand.fail_on_error,
            error_comments: config.expand.error_comments,
        };
        Ok(Self::new(
            Arc::new(registry),
            MarkdownConverter::new(extensions),
            options,
        ))
    }

    /// Load `tagmark.toml` (explicit or discovered) and build a pipeline from it.
    pub fn load(
        config_path: Option<&Path>,
        overrides: Option<&ConfigOverrides>,
    ) -> Result<Self, PipelineError> {
        let config = Config::load(config_path, overrides)?;
        Self::from_config(&config)
    }

    /// Use a different diagnostics sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticsSink>) -> Self {
        self.engine = self.engine.with_sink(sink);
        self
    }

    pub fn registry(&self) -> &Registry {
        self.engine.registry()
    }

    pub fn converter(&self) -> &MarkdownConverter {
        &self.converter
    }

    pub fn options(&self) -> ExpandOptions {
        self.options
    }

    /// Expand block tags without converting to HTML.
    pub fn expand(&self, source: &str) -> Result<String, ExpandError> {
        self.engine.expand(source, &self.options)
    }

    /// Render one document.
    pub fn render(&self, source: &str) -> Result<RenderedDocument, ExpandError> {
        let expanded = self.expand(source)?;
        let converted = self.converter.convert_with_toc(&expanded);
        let words = word_count(source);

        Ok(RenderedDocument {
            html: converted.html,
            toc: converted.toc,
            word_count: words,
            reading_time_minutes: reading_time_minutes(words),
        })
    }

    /// Render documents in parallel. Results keep the input order and a
    /// failure only affects its own entry.
    pub fn render_many(&self, sources: &[&str]) -> Vec<Result<RenderedDocument, ExpandError>> {
        sources.par_iter().map(|source| self.render(source)).collect()
    }
}
