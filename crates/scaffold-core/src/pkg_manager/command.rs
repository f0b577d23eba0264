//! Rewriting npm-generic command templates for the detected package manager
//!
//! Delegate templates in the catalog are written against npm (`npm create
//! ...` / `npm exec ...`). Before spawning, those strings are rewritten into
//! the syntax of whichever manager invoked this run. The rules are ordered
//! and string-level; a rule's replacement text is never re-matched by a later
//! rule.

use super::{name_or_default, PkgManagerInfo};

/// Placeholder token substituted with the resolved target directory
pub const TARGET_DIR_TOKEN: &str = "TARGET_DIR";

/// Rewrite an npm-generic command for the given package manager.
///
/// Rules, applied in order:
/// 1. Leading `npm create ` (or `npm create -- `) becomes the manager's
///    creation prefix: `bun x create-` for bun, `<manager> create ` for
///    everything else, keeping the `-- ` separator when present. Bun's
///    replacement concatenates with the package name, so the separator is
///    dropped there.
/// 2. The first `@latest` tag is removed for yarn 1, which rejects dist-tags
///    in `yarn create`.
/// 3. Leading `npm exec` becomes `pnpm dlx`, `yarn dlx` (yarn 2+), or
///    `bun x`; npm itself is left unchanged.
pub fn rewrite(command: &str, info: Option<&PkgManagerInfo>) -> String {
    let manager = name_or_default(info);
    let is_yarn1 = info.is_some_and(PkgManagerInfo::is_yarn1);

    let mut out = command.to_string();

    for prefix in ["npm create -- ", "npm create "] {
        if let Some(rest) = out.strip_prefix(prefix) {
            let separator = if prefix.ends_with("-- ") { "-- " } else { "" };
            out = if manager == "bun" {
                format!("bun x create-{rest}")
            } else {
                format!("{manager} create {separator}{rest}")
            };
            break;
        }
    }

    if is_yarn1 {
        out = out.replacen("@latest", "", 1);
    }

    if let Some(rest) = out.strip_prefix("npm exec") {
        let replacement = match manager {
            "pnpm" => "pnpm dlx",
            "yarn" if !is_yarn1 => "yarn dlx",
            "bun" => "bun x",
            _ => "npm exec",
        };
        out = format!("{replacement}{rest}");
    }

    out
}

/// Split a rewritten command into program and arguments, substituting the
/// `TARGET_DIR` token. Substitution applies to argument tokens only, never to
/// the program name.
pub fn split_with_target(command: &str, target_dir: &str) -> (String, Vec<String>) {
    let mut parts = command.split_whitespace();
    let program = parts.next().unwrap_or_default().to_string();
    let args = parts
        .map(|arg| arg.replace(TARGET_DIR_TOKEN, target_dir))
        .collect();
    (program, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str, version: &str) -> Option<PkgManagerInfo> {
        Some(PkgManagerInfo {
            name: name.to_string(),
            version: version.to_string(),
        })
    }

    fn render(command: &str, info: Option<&PkgManagerInfo>, target: &str) -> String {
        let rewritten = rewrite(command, info);
        let (program, args) = split_with_target(&rewritten, target);
        std::iter::once(program)
            .chain(args)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_pnpm_create() {
        let result = render(
            "npm create vite@latest TARGET_DIR",
            info("pnpm", "8.0.0").as_ref(),
            "my-app",
        );
        assert_eq!(result, "pnpm create vite@latest my-app");
    }

    #[test]
    fn test_yarn1_create_drops_latest_tag() {
        let result = render(
            "npm create vite@latest TARGET_DIR",
            info("yarn", "1.22.0").as_ref(),
            "my-app",
        );
        assert_eq!(result, "yarn create vite my-app");
    }

    #[test]
    fn test_yarn_berry_keeps_latest_tag() {
        let result = render(
            "npm create vite@latest TARGET_DIR",
            info("yarn", "4.1.0").as_ref(),
            "my-app",
        );
        assert_eq!(result, "yarn create vite@latest my-app");
    }

    #[test]
    fn test_bun_create_concatenates() {
        let result = render(
            "npm create vue@latest TARGET_DIR",
            info("bun", "1.0.0").as_ref(),
            "my-app",
        );
        assert_eq!(result, "bun x create-vue@latest my-app");
    }

    #[test]
    fn test_bun_exec() {
        let result = render("npm exec create-foo", info("bun", "1.0.0").as_ref(), "x");
        assert_eq!(result, "bun x create-foo");
    }

    #[test]
    fn test_pnpm_exec() {
        let result = render(
            "npm exec nuxi init TARGET_DIR",
            info("pnpm", "8.0.0").as_ref(),
            "my-app",
        );
        assert_eq!(result, "pnpm dlx nuxi init my-app");
    }

    #[test]
    fn test_yarn_berry_exec() {
        let result = rewrite("npm exec nuxi init TARGET_DIR", info("yarn", "4.1.0").as_ref());
        assert_eq!(result, "yarn dlx nuxi init TARGET_DIR");
    }

    #[test]
    fn test_default_manager_unchanged() {
        let result = render("npm create vite@latest TARGET_DIR", None, "my-app");
        assert_eq!(result, "npm create vite@latest my-app");

        let result = render("npm exec nuxi init TARGET_DIR", None, "my-app");
        assert_eq!(result, "npm exec nuxi init my-app");
    }

    #[test]
    fn test_separator_preserved() {
        let result = rewrite("npm create -- foo@latest TARGET_DIR", info("pnpm", "8.0.0").as_ref());
        assert_eq!(result, "pnpm create -- foo@latest TARGET_DIR");
    }

    #[test]
    fn test_separator_dropped_for_bun() {
        let result = rewrite("npm create -- foo TARGET_DIR", info("bun", "1.0.0").as_ref());
        assert_eq!(result, "bun x create-foo TARGET_DIR");
    }

    #[test]
    fn test_create_rewrite_never_rematches_exec_rule() {
        // "pnpm create ..." must not then match the `npm exec` rule, and a
        // bun rewrite must not be rewritten twice.
        let result = rewrite("npm create qwik@latest basic TARGET_DIR", info("bun", "1.0.0").as_ref());
        assert_eq!(result, "bun x create-qwik@latest basic TARGET_DIR");
    }

    #[test]
    fn test_target_dir_not_substituted_in_program_name() {
        let (program, args) = split_with_target("TARGET_DIR run TARGET_DIR", "my-app");
        assert_eq!(program, "TARGET_DIR");
        assert_eq!(args, vec!["run", "my-app"]);
    }
}
