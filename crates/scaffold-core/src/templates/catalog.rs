//! Compiled-in template catalog
//!
//! The catalog is a closed set of frameworks and variants, declared as a
//! static table rather than a runtime registry. Variant ids are globally
//! unique, filesystem-safe tokens: a local variant `foo` materializes from
//! the bundled `template-foo` directory, while a variant carrying a
//! `delegate_command` is produced by an external generator instead.
//!
//! The `color` fields are opaque display hints for the prompt layer; nothing
//! in the engine interprets them.

use colored::Color;

/// One selectable flavor of a framework
#[derive(Debug)]
pub struct TemplateVariant {
    pub id: &'static str,
    pub display_name: &'static str,
    pub color: Color,
    /// npm-generic command for variants produced by an external generator
    pub delegate_command: Option<&'static str>,
}

/// A framework grouping its variants
#[derive(Debug)]
pub struct Framework {
    pub id: &'static str,
    pub display_name: &'static str,
    pub color: Color,
    pub variants: &'static [TemplateVariant],
}

pub const FRAMEWORKS: &[Framework] = &[
    Framework {
        id: "vanilla",
        display_name: "Vanilla",
        color: Color::Yellow,
        variants: &[
            TemplateVariant {
                id: "vanilla-ts",
                display_name: "TypeScript",
                color: Color::Blue,
                delegate_command: None,
            },
            TemplateVariant {
                id: "vanilla",
                display_name: "JavaScript",
                color: Color::Yellow,
                delegate_command: None,
            },
        ],
    },
    Framework {
        id: "vue",
        display_name: "Vue",
        color: Color::Green,
        variants: &[
            TemplateVariant {
                id: "vue-ts",
                display_name: "TypeScript",
                color: Color::Blue,
                delegate_command: None,
            },
            TemplateVariant {
                id: "vue",
                display_name: "JavaScript",
                color: Color::Yellow,
                delegate_command: None,
            },
            TemplateVariant {
                id: "custom-create-vue",
                display_name: "Customize with create-vue",
                color: Color::Green,
                delegate_command: Some("npm create vue@latest TARGET_DIR"),
            },
            TemplateVariant {
                id: "custom-nuxt",
                display_name: "Nuxt",
                color: Color::BrightGreen,
                delegate_command: Some("npm exec nuxi init TARGET_DIR"),
            },
        ],
    },
    Framework {
        id: "react",
        display_name: "React",
        color: Color::Cyan,
        variants: &[
            TemplateVariant {
                id: "react-ts",
                display_name: "TypeScript",
                color: Color::Blue,
                delegate_command: None,
            },
            TemplateVariant {
                id: "react",
                display_name: "JavaScript",
                color: Color::Yellow,
                delegate_command: None,
            },
            TemplateVariant {
                id: "custom-react-router",
                display_name: "React Router v7",
                color: Color::Cyan,
                delegate_command: Some("npm create react-router@latest TARGET_DIR"),
            },
        ],
    },
    Framework {
        id: "preact",
        display_name: "Preact",
        color: Color::Magenta,
        variants: &[
            TemplateVariant {
                id: "preact-ts",
                display_name: "TypeScript",
                color: Color::Blue,
                delegate_command: None,
            },
            TemplateVariant {
                id: "preact",
                display_name: "JavaScript",
                color: Color::Yellow,
                delegate_command: None,
            },
            TemplateVariant {
                id: "custom-create-preact",
                display_name: "Customize with create-preact",
                color: Color::Magenta,
                delegate_command: Some("npm create preact@latest TARGET_DIR"),
            },
        ],
    },
    Framework {
        id: "lit",
        display_name: "Lit",
        color: Color::BrightRed,
        variants: &[
            TemplateVariant {
                id: "lit-ts",
                display_name: "TypeScript",
                color: Color::Blue,
                delegate_command: None,
            },
            TemplateVariant {
                id: "lit",
                display_name: "JavaScript",
                color: Color::Yellow,
                delegate_command: None,
            },
        ],
    },
    Framework {
        id: "svelte",
        display_name: "Svelte",
        color: Color::Red,
        variants: &[
            TemplateVariant {
                id: "svelte-ts",
                display_name: "TypeScript",
                color: Color::Blue,
                delegate_command: None,
            },
            TemplateVariant {
                id: "svelte",
                display_name: "JavaScript",
                color: Color::Yellow,
                delegate_command: None,
            },
            TemplateVariant {
                id: "custom-svelte-kit",
                display_name: "SvelteKit",
                color: Color::Red,
                delegate_command: Some("npm exec sv create TARGET_DIR"),
            },
        ],
    },
    Framework {
        id: "solid",
        display_name: "Solid",
        color: Color::Blue,
        variants: &[
            TemplateVariant {
                id: "solid-ts",
                display_name: "TypeScript",
                color: Color::Blue,
                delegate_command: None,
            },
            TemplateVariant {
                id: "solid",
                display_name: "JavaScript",
                color: Color::Yellow,
                delegate_command: None,
            },
        ],
    },
    Framework {
        id: "qwik",
        display_name: "Qwik",
        color: Color::BrightBlue,
        variants: &[
            TemplateVariant {
                id: "qwik-ts",
                display_name: "TypeScript",
                color: Color::Blue,
                delegate_command: None,
            },
            TemplateVariant {
                id: "qwik",
                display_name: "JavaScript",
                color: Color::Yellow,
                delegate_command: None,
            },
            TemplateVariant {
                id: "custom-qwik-city",
                display_name: "QwikCity",
                color: Color::BrightBlue,
                delegate_command: Some("npm create qwik@latest basic TARGET_DIR"),
            },
        ],
    },
    Framework {
        id: "angular",
        display_name: "Angular",
        color: Color::Red,
        variants: &[TemplateVariant {
            id: "custom-angular",
            display_name: "Angular CLI",
            color: Color::Red,
            delegate_command: Some("npm exec @angular/cli@latest new TARGET_DIR"),
        }],
    },
];

/// All variant ids in declaration order, used to validate `--template`
pub fn list_template_ids() -> Vec<&'static str> {
    FRAMEWORKS
        .iter()
        .flat_map(|framework| framework.variants.iter().map(|variant| variant.id))
        .collect()
}

/// Look up a variant by id. The catalog is small; a linear scan is enough.
pub fn find_variant(id: &str) -> Option<&'static TemplateVariant> {
    FRAMEWORKS
        .iter()
        .flat_map(|framework| framework.variants.iter())
        .find(|variant| variant.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_variant_ids_are_unique() {
        let ids = list_template_ids();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn test_variant_ids_are_filesystem_safe() {
        for id in list_template_ids() {
            assert!(
                id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'),
                "id {:?} is not a safe directory suffix",
                id
            );
        }
    }

    #[test]
    fn test_find_local_variant() {
        let variant = find_variant("vue").unwrap();
        assert_eq!(variant.display_name, "JavaScript");
        assert!(variant.delegate_command.is_none());
    }

    #[test]
    fn test_find_delegate_variant() {
        let variant = find_variant("custom-create-vue").unwrap();
        assert_eq!(
            variant.delegate_command,
            Some("npm create vue@latest TARGET_DIR")
        );
    }

    #[test]
    fn test_unknown_variant() {
        assert!(find_variant("does-not-exist").is_none());
    }

    #[test]
    fn test_list_follows_declaration_order() {
        let ids = list_template_ids();
        assert_eq!(ids[0], "vanilla-ts");
        assert_eq!(ids[1], "vanilla");
        assert_eq!(*ids.last().unwrap(), "custom-angular");
    }
}
