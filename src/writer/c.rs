//! Flat C declarations: `<prefix>_<file>_data[]` / `<prefix>_<file>_length`.

use crate::options::Options;
use crate::processor::encoder::render_data;

/// `top_file` when a top level namespace is set, plain `file` otherwise.
pub fn namespace_token(options: &Options, file_name: &str) -> String {
    let file_ns = options.namespace.namespace(file_name);
    match options.top_level_namespace() {
        Some(top) => format!("{top}_{file_ns}"),
        None => file_ns,
    }
}

pub fn emit(options: &Options, file_name: &str, data: &[u8]) -> String {
    let ns = namespace_token(options, file_name);
    format!(
        "const {data_type} {ns}_data[] = {literal};\nconst {length_type} {ns}_length = {len};",
        data_type = options.data_type,
        literal = render_data(data),
        length_type = options.length_type,
        len = data.len(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{PartialOptions, resolve};

    #[test]
    fn emits_flat_pair() {
        let opts = resolve(PartialOptions::c());
        assert_eq!(
            emit(&opts, "main.js", b"abc"),
            "const unsigned char main_js_data[] = {97,98,99};\nconst unsigned int main_js_length = 3;"
        );
    }

    #[test]
    fn top_level_namespace_is_a_prefix() {
        let opts = resolve(PartialOptions {
            top_level_namespace: Some("web".into()),
            data_type: Some("uint8_t".into()),
            length_type: Some("size_t".into()),
            ..PartialOptions::c()
        });
        assert_eq!(
            emit(&opts, "index.html", &[]),
            "const uint8_t web_index_html_data[] = {};\nconst size_t web_index_html_length = 0;"
        );
    }

    #[test]
    fn custom_namer_output_is_used_unchecked() {
        let opts = resolve(PartialOptions {
            namespace: Some(Box::new(|_: &str| "not-an-ident".to_string())),
            ..PartialOptions::c()
        });
        assert_eq!(namespace_token(&opts, "x"), "not-an-ident");
    }
}
