//! Pure text generators for the emitted TypeScript sources.
//!
//! Every function here is stateless and side-effect free: inputs in, source
//! text out. The pipeline decides what gets generated and where it lands;
//! these functions only own the shape of the text.

use crate::models::IconDefinition;

/// Generate one icon constant module.
///
/// ```ts
/// export const mdHome: MyIconType = {
///     name: 'md-home',
///     data: '<svg ...></svg>'
/// };
/// ```
pub fn svg_constant(variable_name: &str, type_name: &str, icon_key: &str, data: &str) -> String {
    // SVG attributes use double quotes; single quotes and backslashes still
    // need escaping to survive the single-quoted TS string literal.
    let data = data.replace('\\', "\\\\").replace('\'', "\\'");
    format!(
        "export const {variable_name}: {type_name} = {{\n    name: '{icon_key}',\n    data: '{data}'\n}};\n"
    )
}

/// Generate a barrel re-export line for one generated module.
pub fn export_statement(base_name: &str, icons_folder_name: &str) -> String {
    format!("export * from './{icons_folder_name}/{base_name}';\n")
}

/// Generate the barrel header: the subset type helper, importing the
/// interface from the model module when one is generated.
///
/// Without a model file the helper is self-contained, constrained over the
/// minimal `{ name: string }` shape instead of the named interface.
pub fn type_helper_with_import(
    interface_name: &str,
    icons_folder_name: &str,
    model_file_name: Option<&str>,
) -> String {
    match model_file_name {
        Some(model) => format!(
            "import {{ {interface_name} }} from './{icons_folder_name}/{model}';\n\n\
             export type {interface_name}Subset<T extends Readonly<{interface_name}[]>> = T[number]['name'];\n"
        ),
        None => format!(
            "export type {interface_name}Subset<T extends Readonly<{{ name: string }}[]>> = T[number]['name'];\n"
        ),
    }
}

/// Generate the union type of valid icon keys.
///
/// An empty set degrades to `string`; a zero-arm union is unrepresentable
/// and `never` would make the interface unusable.
pub fn type_definition(type_name: &str, definitions: &[IconDefinition]) -> String {
    if definitions.is_empty() {
        return format!("export type {type_name} = string;\n");
    }

    let keys = definitions
        .iter()
        .map(|definition| format!("'{}'", definition.icon_key()))
        .collect::<Vec<_>>()
        .join(" | ");

    format!("export type {type_name} = {keys};\n")
}

/// Generate the consumer-facing interface definition.
pub fn interface_definition(interface_name: &str, type_name: &str) -> String {
    format!(
        "export interface {interface_name} {{\n    name: {type_name};\n    data: string;\n}}\n"
    )
}

/// Generate the aggregate module bundling every icon constant.
///
/// Produced even for an empty definition set: the array is simply empty.
pub fn complete_icon_set_content(definitions: &[IconDefinition]) -> String {
    let imports = definitions
        .iter()
        .map(|definition| {
            format!(
                "import {{ {} }} from './{}';\n",
                definition.variable_name,
                definition.generated_file_name()
            )
        })
        .collect::<String>();

    let entries = definitions
        .iter()
        .map(|definition| format!("    {}", definition.variable_name))
        .collect::<Vec<_>>()
        .join(",\n");

    if entries.is_empty() {
        format!("{imports}export const completeIconSet = [];\n")
    } else {
        format!("{imports}\nexport const completeIconSet = [\n{entries}\n];\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(prefix: &str, name: &str, variable: &str) -> IconDefinition {
        IconDefinition {
            prefix: prefix.to_string(),
            filename_without_ending: name.to_string(),
            variable_name: variable.to_string(),
            type_name: "MyIconType".to_string(),
            data: "<svg></svg>".to_string(),
        }
    }

    #[test]
    fn test_svg_constant() {
        let text = svg_constant("mdHome", "MyIconType", "md-home", "<svg></svg>");
        assert!(text.contains("export const mdHome: MyIconType"));
        assert!(text.contains("name: 'md-home'"));
        assert!(text.contains("data: '<svg></svg>'"));
    }

    #[test]
    fn test_export_statement() {
        assert_eq!(
            export_statement("md-home.icon", "icons"),
            "export * from './icons/md-home.icon';\n"
        );
    }

    #[test]
    fn test_type_helper_imports_model_when_present() {
        let text = type_helper_with_import("IconInterface", "icons", Some("model"));
        assert!(text.contains("import { IconInterface } from './icons/model';"));
        assert!(text.contains(
            "export type IconInterfaceSubset<T extends Readonly<IconInterface[]>>"
        ));
    }

    #[test]
    fn test_type_helper_without_model_has_no_import() {
        let text = type_helper_with_import("IconInterface", "icons", None);
        assert!(!text.contains("import"));
        assert!(text.contains("export type IconInterfaceSubset"));
    }

    #[test]
    fn test_type_helper_subset_name_follows_interface() {
        let text = type_helper_with_import("IconName", "icons", Some("model"));
        assert!(text.contains("export type IconNameSubset"));
        assert!(!text.contains("IconSubset"));
    }

    #[test]
    fn test_type_definition_union() {
        let definitions = vec![
            definition("md", "home", "mdHome"),
            definition("md", "star", "mdStar"),
        ];
        assert_eq!(
            type_definition("MyIconType", &definitions),
            "export type MyIconType = 'md-home' | 'md-star';\n"
        );
    }

    #[test]
    fn test_type_definition_empty_is_string() {
        assert_eq!(
            type_definition("MyIconType", &[]),
            "export type MyIconType = string;\n"
        );
    }

    #[test]
    fn test_interface_definition() {
        let text = interface_definition("IconInterface", "MyIconType");
        assert!(text.contains("export interface IconInterface"));
        assert!(text.contains("name: MyIconType;"));
        assert!(text.contains("data: string;"));
    }

    #[test]
    fn test_complete_icon_set_preserves_order() {
        let definitions = vec![
            definition("md", "zebra", "mdZebra"),
            definition("md", "apple", "mdApple"),
        ];
        let text = complete_icon_set_content(&definitions);

        let zebra_import = text.find("import { mdZebra }").unwrap();
        let apple_import = text.find("import { mdApple }").unwrap();
        assert!(zebra_import < apple_import);

        let zebra_entry = text.rfind("mdZebra").unwrap();
        let apple_entry = text.rfind("mdApple").unwrap();
        assert!(zebra_entry < apple_entry);
    }

    #[test]
    fn test_complete_icon_set_empty() {
        assert_eq!(
            complete_icon_set_content(&[]),
            "export const completeIconSet = [];\n"
        );
    }
}
