use heck::ToSnakeCase;

/// Converts a Rust type name (`UpperCamelCase`) into the `snake_case` form
/// used for method names.
pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}
