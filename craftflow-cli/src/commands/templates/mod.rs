pub mod store;

use heck::{ToLowerCamelCase, ToPascalCase};

/// Capitalized placeholder token in module templates.
pub const CLASS_TOKEN: &str = "Base";
/// Lowercase placeholder token in module templates.
pub const VAR_TOKEN: &str = "base";

/// The two identifier forms derived from a module name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleNames {
    /// PascalCase form, e.g. `UserProfile`.
    pub class_name: String,
    /// camelCase form, e.g. `userProfile`.
    pub var_name: String,
}

impl ModuleNames {
    pub fn from_module_name(name: &str) -> Self {
        Self {
            class_name: to_pascal_case(name),
            var_name: to_camel_case(name),
        }
    }
}

/// Convert any word-delimited name to PascalCase (`order-item` → `OrderItem`).
pub fn to_pascal_case(name: &str) -> String {
    name.to_pascal_case()
}

/// Convert any word-delimited name to camelCase (`order-item` → `orderItem`).
pub fn to_camel_case(name: &str) -> String {
    name.to_lower_camel_case()
}

/// Replace every `Base` with the class name, then every `base` with the
/// variable name.
///
/// Matching is by literal substring: `database` in a template becomes
/// `data<var_name>`.
pub fn substitute(template: &str, names: &ModuleNames) -> String {
    template
        .replace(CLASS_TOKEN, &names.class_name)
        .replace(VAR_TOKEN, &names.var_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitute_replaces_both_tokens() {
        let names = ModuleNames::from_module_name("task");
        let out = substitute("class BaseService { base: Base }", &names);
        assert_eq!(out, "class TaskService { task: Task }");
    }

    #[test]
    fn substitute_without_tokens_is_identity() {
        let names = ModuleNames::from_module_name("task");
        assert_eq!(substitute("export {};\n", &names), "export {};\n");
    }
}
