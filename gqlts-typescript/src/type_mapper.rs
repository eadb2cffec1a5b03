//! TypeScript type mapper implementation.

use gqlts_core::ScalarTypeMap;

use crate::schema::TypeDescriptor;

/// Maps normalized schema types to TypeScript type syntax.
#[derive(Debug, Clone, Copy)]
pub struct TypeScriptTypeMapper<'a> {
    scalars: &'a ScalarTypeMap,
}

impl<'a> TypeScriptTypeMapper<'a> {
    pub fn new(scalars: &'a ScalarTypeMap) -> Self {
        Self { scalars }
    }

    /// Render a type descriptor.
    ///
    /// Named types map through the scalar table, falling back to the name
    /// itself. Nullable positions gain `| null`.
    pub fn map_type(&self, ty: &TypeDescriptor) -> String {
        let base = self.scalars.resolve(&ty.base_name);

        let rendered = match ty.list_element_nullable {
            Some(true) => format!("({base} | null)[]"),
            Some(false) => format!("{base}[]"),
            None => base.to_string(),
        };

        if ty.nullable {
            format!("{rendered} | null")
        } else {
            rendered
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(ty: TypeDescriptor) -> String {
        TypeScriptTypeMapper::new(&ScalarTypeMap::new()).map_type(&ty)
    }

    #[test]
    fn test_named_types() {
        assert_eq!(map(TypeDescriptor::named("String", false)), "string");
        assert_eq!(map(TypeDescriptor::named("Int", true)), "number | null");
        assert_eq!(map(TypeDescriptor::named("Boolean", false)), "boolean");
    }

    #[test]
    fn test_list_types() {
        // [String!]
        assert_eq!(map(TypeDescriptor::list("String", true, false)), "string[] | null");
        // [Int]!
        assert_eq!(map(TypeDescriptor::list("Int", false, true)), "(number | null)[]");
        // [ID!]!
        assert_eq!(map(TypeDescriptor::list("ID", false, false)), "string[]");
        // [Float]
        assert_eq!(
            map(TypeDescriptor::list("Float", true, true)),
            "(number | null)[] | null"
        );
    }

    #[test]
    fn test_unmapped_names_pass_through() {
        assert_eq!(map(TypeDescriptor::named("Money", false)), "Money");
        assert_eq!(map(TypeDescriptor::list("User", true, false)), "User[] | null");
    }

    #[test]
    fn test_overrides_apply() {
        let scalars = ScalarTypeMap::new().merged([("ID", "number"), ("Date", "Date")]);
        let mapper = TypeScriptTypeMapper::new(&scalars);
        assert_eq!(mapper.map_type(&TypeDescriptor::named("ID", false)), "number");
        assert_eq!(mapper.map_type(&TypeDescriptor::named("Date", true)), "Date | null");
    }
}
