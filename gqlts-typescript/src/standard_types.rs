//! The resolver calling convention shared by every generated module.

use gqlts_codegen::{CodeFragment, Renderable};

use crate::ast::TypeAlias;

/// `ArgsObject`, `EmptyArgs`, `Resolver` and `Field`, in that order.
///
/// A `Field` without arguments may be a plain value or a resolver; a field
/// with arguments must be a resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardTypes;

impl StandardTypes {
    fn groups() -> [Vec<TypeAlias>; 3] {
        [
            vec![
                TypeAlias::new("ArgsObject", "{ [key: string]: any }"),
                TypeAlias::new("EmptyArgs", "{ [key: string]: never }"),
            ],
            vec![TypeAlias::new(
                "Resolver<ReturnType, Args extends ArgsObject = EmptyArgs>",
                "(args: Args, context: Context, info: Info) => ReturnType | Promise<ReturnType>",
            )],
            vec![TypeAlias::new(
                "Field<ReturnType, Args extends ArgsObject = EmptyArgs>",
                "Args extends EmptyArgs ? ReturnType | Resolver<ReturnType, Args> : Resolver<ReturnType, Args>",
            )],
        ]
    }
}

impl Renderable for StandardTypes {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        for (index, group) in Self::groups().iter().enumerate() {
            if index > 0 {
                fragments.push(CodeFragment::Blank);
            }
            fragments.extend(group.iter().flat_map(Renderable::to_fragments));
        }
        fragments
    }
}

#[cfg(test)]
mod tests {
    use gqlts_codegen::CodeBuilder;

    use super::*;

    #[test]
    fn test_standard_types() {
        let mut builder = CodeBuilder::typescript();
        builder.emit(&StandardTypes);
        insta::assert_snapshot!(builder.build(), @r"
        export type ArgsObject = { [key: string]: any };
        export type EmptyArgs = { [key: string]: never };

        export type Resolver<ReturnType, Args extends ArgsObject = EmptyArgs> = (args: Args, context: Context, info: Info) => ReturnType | Promise<ReturnType>;

        export type Field<ReturnType, Args extends ArgsObject = EmptyArgs> = Args extends EmptyArgs ? ReturnType | Resolver<ReturnType, Args> : Resolver<ReturnType, Args>;
        ");
    }
}
