//! Turn encoded bytes into the final header text.
pub mod c;
pub mod cpp;

use crate::options::{Language, Options};

/// Prepend lines and `#include` directives, one per line.
pub fn preamble(options: &Options) -> String {
    options
        .prepend
        .iter()
        .cloned()
        .chain(options.include.iter().map(|header| format!("#include {header}")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Compose the complete header for one file.
pub fn render_file(options: &Options, file_name: &str, data: &[u8]) -> String {
    let body = match options.language {
        Language::C => c::emit(options, file_name, data),
        Language::Cpp(cpp) => cpp::emit(options, cpp, file_name, data),
    };

    let preamble = preamble(options);
    if preamble.is_empty() {
        body
    } else {
        format!("{preamble}\n{body}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{PartialOptions, resolve};

    #[test]
    fn preamble_comes_first() {
        let opts = resolve(PartialOptions {
            prepend: Some(vec!["#pragma once".into()]),
            include: Some(vec!["<cstdint>".into()]),
            ..PartialOptions::cpp()
        });
        let text = render_file(&opts, "main.js", b"a");
        assert!(
            text.starts_with("#pragma once\n#include <cstdint>\nnamespace main_js {\n"),
            "got: {text}"
        );
    }

    #[test]
    fn includes_are_inserted_verbatim_in_order() {
        let opts = resolve(PartialOptions {
            include: Some(vec!["<stdint.h>".into(), "\"config.h\"".into()]),
            ..PartialOptions::c()
        });
        assert_eq!(
            render_file(&opts, "x", &[]),
            "#include <stdint.h>\n#include \"config.h\"\n\
             const unsigned char x_data[] = {};\n\
             const unsigned int x_length = 0;"
        );
    }

    #[test]
    fn no_preamble_means_body_only() {
        let opts = resolve(PartialOptions::c());
        assert_eq!(render_file(&opts, "x", &[1]), c::emit(&opts, "x", &[1]));
    }

    #[test]
    fn dispatches_on_language() {
        let c = render_file(&resolve(PartialOptions::c()), "a", &[]);
        let cpp = render_file(&resolve(PartialOptions::cpp()), "a", &[]);
        assert!(c.starts_with("const unsigned char a_data[]"));
        assert!(cpp.starts_with("namespace a {"));
    }
}
