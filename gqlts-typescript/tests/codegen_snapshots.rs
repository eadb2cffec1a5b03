//! End-to-end tests of the generated TypeScript module.

use gqlts_codegen::{FormatError, Formatter};
use gqlts_core::{EndOfLine, FormatOptions, GenerationOptions};
use gqlts_typescript::{Generator, generate_server_types, with_version_placeholder};

const SCHEMA: &str = r#"
"A node"
interface Node {
  id: ID!
}

scalar Money
scalar Date

"Something searchable"
union SearchResult = User | Product

enum Role {
  ADMIN
  "Regular user"
  USER @deprecated(reason: "use MEMBER")
  MEMBER
}

input ProductFilter {
  "Max price"
  maxPrice: Money
  tags: [String!]
}

type User implements Node {
  id: ID!
  roles: [Role]!
}

type Product implements Node {
  id: ID!
  price: Money!
}

type Query {
  search(text: String!, filter: ProductFilter): [SearchResult!]!
  user(id: ID!): User
}
"#;

/// Leaves the assembled text as the generator built it.
struct Unformatted;

impl Formatter for Unformatted {
    fn format(&self, source: &str, _: &FormatOptions) -> Result<String, FormatError> {
        Ok(source.to_string())
    }
}

fn generate(schema: &str) -> String {
    generate_server_types(schema, &GenerationOptions::default()).unwrap()
}

fn generate_with(schema: &str, format: FormatOptions) -> String {
    generate_server_types(schema, &GenerationOptions::default().with_format(format)).unwrap()
}

/// Extract and unescape the template literal of `export const source`.
fn embedded_source(output: &str) -> String {
    let start = output.find("export const source = `").unwrap() + "export const source = `".len();
    let end = output.rfind("`;").unwrap();

    let mut unescaped = String::new();
    let mut chars = output[start..end].chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('r') => unescaped.push('\r'),
                escaped => unescaped.extend(escaped),
            }
        } else {
            unescaped.push(c);
        }
    }
    unescaped
}

#[test]
fn test_assembled_output() {
    let output = Generator::new(GenerationOptions::default())
        .with_formatter(Unformatted)
        .generate(SCHEMA)
        .unwrap();
    let output = with_version_placeholder(&output);
    insta::assert_snapshot!(output, @r#"
    /* *********************************************************************
     * This code was generated by a tool.
     * gqlts@<%= PACKAGE_VERSION %>
     *
     * Changes to this file may cause incorrect behavior and will be lost if
     * the code is regenerated.
     ***********************************************************************/

    import { Context, Info } from "./context";
    import { Money } from "./scalars";

    export type ArgsObject = { [key: string]: any };
    export type EmptyArgs = { [key: string]: never };

    export type Resolver<ReturnType, Args extends ArgsObject = EmptyArgs> = (args: Args, context: Context, info: Info) => ReturnType | Promise<ReturnType>;

    export type Field<ReturnType, Args extends ArgsObject = EmptyArgs> = Args extends EmptyArgs ? ReturnType | Resolver<ReturnType, Args> : Resolver<ReturnType, Args>;

    /** A node */
    export interface Node {
      id: Field<string>;
    }

    /** Something searchable */
    export type SearchResult = User | Product;

    export enum Role {
      ADMIN = "ADMIN",

      /**
       * Regular user
       * @deprecated use MEMBER
       */
      USER = "USER",
      MEMBER = "MEMBER",
    }

    export interface ProductFilter {
      /** Max price */
      maxPrice: Money | null;
      tags: string[] | null;
    }

    export interface User extends Node {
      id: Field<string>;
      roles: Field<(Role | null)[]>;
    }

    export interface Product extends Node {
      id: Field<string>;
      price: Field<Money>;
    }

    export interface Query {
      search: Field<SearchResult[], { text: string; filter: ProductFilter | null }>;
      user: Field<User | null, { id: string }>;
    }

    export const source = `
    "A node"
    interface Node {
      id: ID!
    }

    scalar Money
    scalar Date

    "Something searchable"
    union SearchResult = User | Product

    enum Role {
      ADMIN
      "Regular user"
      USER @deprecated(reason: "use MEMBER")
      MEMBER
    }

    input ProductFilter {
      "Max price"
      maxPrice: Money
      tags: [String!]
    }

    type User implements Node {
      id: ID!
      roles: [Role]!
    }

    type Product implements Node {
      id: ID!
      price: Money!
    }

    type Query {
      search(text: String!, filter: ProductFilter): [SearchResult!]!
      user(id: ID!): User
    }
    `;
    "#);
}

#[test]
fn test_formatted_output() {
    let output = generate(SCHEMA);

    assert!(output.starts_with("/* ****"));
    assert!(output.contains("import { Context, Info } from \"./context\";\n"));
    assert!(output.contains("export type ArgsObject = { [key: string]: any };\n"));
    assert!(output.contains("export interface User extends Node {\n"));
    assert!(output.contains("  roles: Field<(Role | null)[]>;\n"));
    assert!(output.contains("  ADMIN = \"ADMIN\",\n"));
    assert!(output.contains("   * @deprecated use MEMBER\n"));
    assert_eq!(embedded_source(&output), SCHEMA);
}

#[test]
fn test_print_width_wraps_long_lines() {
    let resolver = "export type Resolver<ReturnType, Args extends ArgsObject = EmptyArgs> = (args: Args, context: Context, info: Info) => ReturnType | Promise<ReturnType>;";

    let wide = generate_with(
        "type Query { a: Int }",
        FormatOptions {
            print_width: 200,
            ..FormatOptions::default()
        },
    );
    assert!(wide.contains(resolver));

    let narrow = generate("type Query { a: Int }");
    assert!(!narrow.contains(resolver));
    assert!(narrow.contains("export type Resolver<"));
}

#[test]
fn test_output_is_idempotent() {
    assert_eq!(generate(SCHEMA), generate(SCHEMA));
}

#[test]
fn test_source_round_trips() {
    let schemas = [
        SCHEMA,
        "type Query { a: Int }",
        "\"\"\"\nUse `code`, ${interpolation} and C:\\path\\to\n\"\"\"\ntype Query {\n  a: Int\n}\n",
        "type Query {\r\n  a: Int\r\n}\r\n",
    ];
    for schema in schemas {
        assert_eq!(embedded_source(&generate(schema)), schema);
    }
}

#[test]
fn test_hello_field_without_scalar_import() {
    let output = generate("type Query { hello: String! }");
    assert!(output.contains("hello: Field<string>"));
    assert!(output.contains("import { Context, Info } from \"./context\";"));
    assert!(!output.contains("./scalars"));
}

#[test]
fn test_scalar_import() {
    let output = generate("scalar Money\ntype Query { total: Money }");
    assert!(output.contains("import { Money } from \"./scalars\";"));
    assert!(output.contains("total: Field<Money | null>;"));
}

#[test]
fn test_scalar_imports_sorted_deduped_without_date() {
    let output = generate("scalar Url\nscalar Date\nscalar Email\nscalar Url\nscalar Date");
    assert!(output.contains("import { Email, Url } from \"./scalars\";"));
    assert_eq!(output.matches("from \"./scalars\"").count(), 1);
}

#[test]
fn test_interface_extension() {
    let output = generate("interface Node { id: ID! }\ntype User implements Node { id: ID! }");
    assert!(output.contains("export interface User extends Node {"));
    assert!(output.contains("export interface Node {"));
}

#[test]
fn test_list_rendering() {
    let output = generate("type Query { a: [String!], b: [Int]! }");
    assert!(output.contains("a: Field<string[] | null>;"));
    assert!(output.contains("b: Field<(number | null)[]>;"));
}

#[test]
fn test_deprecated_reason() {
    let output = generate("type Query { old: Int @deprecated(reason: \"x\") }");
    assert!(output.contains("/** @deprecated x */"));
}

#[test]
fn test_enum_literals_equal_names() {
    let output = generate("enum Color { RED GREEN blue_ish }");
    for name in ["RED", "GREEN", "blue_ish"] {
        assert!(output.contains(&format!("{name} = \"{name}\",")));
    }
}

#[test]
fn test_schema_extension_is_skipped() {
    let output = generate("type Query { a: Int }\nextend schema { mutation: Query }");
    assert!(output.contains("export interface Query {\n  a: Field<number | null>;\n}"));
    assert_eq!(output.matches("export interface").count(), 1);
}

#[test]
fn test_crlf_line_endings() {
    let output = generate_with(
        "type Query { a: Int }",
        FormatOptions {
            end_of_line: EndOfLine::Crlf,
            ..FormatOptions::default()
        },
    );
    assert!(output.contains("export interface Query {\r\n  a: Field<number | null>;\r\n}\r\n"));
    assert!(!output.replace("\r\n", "").contains('\n'));
}

#[test]
fn test_unsupported_definitions_are_skipped() {
    let output = generate(
        "schema { query: Query }\ndirective @cached on FIELD_DEFINITION\ntype Query { a: Int }\nextend type Query { b: Int }",
    );
    assert!(output.contains("export interface Query {\n  a: Field<number | null>;\n}"));
    assert!(!output.contains("b: Field"));
}

#[test]
fn test_options_are_applied() {
    let options = GenerationOptions::default()
        .with_context_import_path("../context")
        .with_scalars_import_path("../scalars")
        .with_scalar("ID", "number")
        .with_scalar("Money", "bigint")
        .with_format(FormatOptions {
            single_quote: true,
            tab_width: 4,
            ..FormatOptions::default()
        });
    let output = generate_server_types(
        "scalar Money\ntype Query { id: ID!, total: Money! }",
        &options,
    )
    .unwrap();

    assert!(output.contains("import { Context, Info } from '../context';"));
    assert!(output.contains("import { Money } from '../scalars';"));
    assert!(output.contains("export interface Query {\n    id: Field<number>;\n    total: Field<bigint>;\n}"));
}

#[test]
fn test_semicolons_can_be_omitted() {
    let output = generate_with(
        "type Query {\n  a: Int\n}\n",
        FormatOptions {
            semi: false,
            ..FormatOptions::default()
        },
    );

    assert!(output.contains("  a: Field<number | null>\n"));
    assert!(output.contains("export type EmptyArgs = { [key: string]: never }\n"));
    assert!(output.ends_with("}\n`\n"));
}
