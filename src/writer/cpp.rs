//! C++ declarations wrapped in one or two namespace blocks.

use crate::options::{CppOptions, NamespaceStyle, Options};
use crate::processor::encoder::render_data;

fn namespace_block(name: &str, content: &str) -> String {
    format!("namespace {name} {{\n{content}\n}}")
}

pub fn emit(options: &Options, cpp: CppOptions, file_name: &str, data: &[u8]) -> String {
    let qualifier = if cpp.constexpr { "constexpr " } else { "" };
    let body = format!(
        "{qualifier}const {data_type} data[] = {literal};\n{qualifier}const {length_type} length = {len};",
        data_type = options.data_type,
        literal = render_data(data),
        length_type = options.length_type,
        len = data.len(),
    );

    let file_ns = options.namespace.namespace(file_name);
    match (options.top_level_namespace(), cpp.namespace_style) {
        (None, _) => namespace_block(&file_ns, &body),
        (Some(top), NamespaceStyle::Cpp17) => namespace_block(&format!("{top}::{file_ns}"), &body),
        (Some(top), NamespaceStyle::Legacy) => {
            namespace_block(top, &namespace_block(&file_ns, &body))
        }
    }
}
