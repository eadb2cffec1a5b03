//! The schema-to-TypeScript pipeline.

use gqlts_codegen::{Formatter, Indent, TypeScriptFormatter};
use gqlts_core::{GenerationOptions, TYPESCRIPT_PARSER};
use tracing::debug;

use crate::{
    code_file::CodeFile,
    declarations::{Declaration, DeclarationBuilder},
    imports::resolve_imports,
    notice::Notice,
    schema::SchemaDocument,
    source::source_const,
    standard_types::StandardTypes,
    Result,
};

/// Generates resolver type declarations from GraphQL SDL.
///
/// The output is, in order: the generated-code notice, the imports, the
/// standard resolver types, one declaration per supported definition and
/// the schema text as `export const source`. Each generation is a pure
/// function of the schema text and the options.
///
/// # Example
///
/// ```
/// use gqlts_core::GenerationOptions;
/// use gqlts_typescript::Generator;
///
/// let generator = Generator::new(GenerationOptions::default());
/// let output = generator.generate("type Query { hello: String! }").unwrap();
///
/// assert!(output.contains("export interface Query {\n  hello: Field<string>;\n}"));
/// ```
#[derive(Debug, Clone)]
pub struct Generator<F = TypeScriptFormatter> {
    options: GenerationOptions,
    formatter: F,
}

impl Generator {
    /// Create a generator using the dprint-backed TypeScript formatter.
    pub fn new(options: GenerationOptions) -> Self {
        Self {
            options,
            formatter: TypeScriptFormatter,
        }
    }
}

impl<F: Formatter> Generator<F> {
    /// Replace the formatter that produces the final text.
    pub fn with_formatter<G: Formatter>(self, formatter: G) -> Generator<G> {
        Generator {
            options: self.options,
            formatter,
        }
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Generate the TypeScript module for `schema`.
    ///
    /// Fails when the schema does not parse, uses a nested list type, or the
    /// formatter rejects the assembled text.
    pub fn generate(&self, schema: &str) -> Result<String> {
        let document = SchemaDocument::parse(schema)?;

        let scalars = self.options.scalar_type_map();
        let builder = DeclarationBuilder::new(&scalars);
        let declarations: Vec<Declaration> = document
            .definitions
            .iter()
            .filter_map(|definition| builder.build(definition))
            .collect();
        debug!(declarations = declarations.len(), "built declarations");

        let imports = resolve_imports(
            &document,
            self.options.context_import_path(),
            self.options.scalars_import_path(),
        );
        debug!(imports = imports.len(), "resolved imports");

        let format = self
            .options
            .format()
            .clone()
            .with_parser(TYPESCRIPT_PARSER);

        let unformatted = CodeFile::new()
            .header(Notice::default())
            .imports(imports)
            .add(StandardTypes)
            .add_all(declarations)
            .add(source_const(schema))
            .render_with_indent(Indent::from_prettier(format.tab_width, format.use_tabs));

        let output = self.formatter.format(&unformatted, &format)?;
        debug!(bytes = output.len(), "formatted output");
        Ok(output)
    }
}

/// Generate resolver types for `schema` with the default formatter.
pub fn generate_server_types(schema: &str, options: &GenerationOptions) -> Result<String> {
    Generator::new(options.clone()).generate(schema)
}
