//! Canonical `.proto` text rendering.
//!
//! Every declaration renders to exactly one text form. Indentation is two
//! spaces per level and composes by indenting a child's whole rendering, so
//! a nested message shifts everything it prints by one level. Blank lines
//! never carry indentation.

use crate::types::{
    EnumType, EnumValue, ExtendDeclaration, ExtensionRange, Field, MessageType, OneOf,
    OptionElement, OptionValue, ProtoFile, Rpc, Service, Type, MAX_TAG,
};

const INDENT: &str = "  ";

/// Renders an option as `name = value`, without a trailing `;`.
pub fn print_option(option: &OptionElement) -> String {
    let mut output = String::new();
    write_option(option, &mut output);
    output
}

/// Renders an enum value with its documentation and inline options.
pub fn print_enum_value(value: &EnumValue) -> String {
    let mut output = String::new();
    write_documentation(value.documentation(), &mut output);
    output.push_str(value.name());
    output.push_str(" = ");
    output.push_str(&value.tag().to_string());
    write_inline_options(value.options(), &mut output);
    output.push_str(";\n");
    output
}

pub fn print_enum_type(enum_type: &EnumType) -> String {
    let mut output = String::new();
    write_documentation(enum_type.documentation(), &mut output);

    let values: String = enum_type.values().iter().map(print_enum_value).collect();
    write_block(
        &format!("enum {}", enum_type.name()),
        &[option_statements(enum_type.options()), values],
        &mut output,
    );
    output
}

pub fn print_field(field: &Field) -> String {
    let mut output = String::new();
    write_documentation(field.documentation(), &mut output);
    if let Some(keyword) = field.label().keyword() {
        output.push_str(keyword);
        output.push(' ');
    }
    output.push_str(field.type_name());
    output.push(' ');
    output.push_str(field.name());
    output.push_str(" = ");
    output.push_str(&field.tag().to_string());
    write_inline_options(field.options(), &mut output);
    output.push_str(";\n");
    output
}

pub fn print_one_of(one_of: &OneOf) -> String {
    let mut output = String::new();
    write_documentation(one_of.documentation(), &mut output);
    write_block(
        &format!("oneof {}", one_of.name()),
        &[one_of.fields().iter().map(print_field).collect::<String>()],
        &mut output,
    );
    output
}

pub fn print_extension_range(range: &ExtensionRange) -> String {
    let mut output = String::new();
    write_documentation(range.documentation(), &mut output);
    output.push_str("extensions ");
    output.push_str(&range.start().to_string());
    if range.end() == MAX_TAG {
        output.push_str(" to max");
    } else if range.end() != range.start() {
        output.push_str(" to ");
        output.push_str(&range.end().to_string());
    }
    output.push_str(";\n");
    output
}

pub fn print_extend(extend: &ExtendDeclaration) -> String {
    let mut output = String::new();
    write_documentation(extend.documentation(), &mut output);
    write_block(
        &format!("extend {}", extend.name()),
        &[extend.fields().iter().map(print_field).collect::<String>()],
        &mut output,
    );
    output
}

/// Renders a message. Body sections, in order: options, fields, oneofs,
/// extension ranges, nested types.
pub fn print_message_type(message: &MessageType) -> String {
    let mut output = String::new();
    write_documentation(message.documentation(), &mut output);
    write_block(
        &format!("message {}", message.name()),
        &[
            option_statements(message.options()),
            message.fields().iter().map(print_field).collect::<String>(),
            separated(message.one_ofs().iter().map(print_one_of)),
            message
                .extensions()
                .iter()
                .map(print_extension_range)
                .collect::<String>(),
            separated(message.nested_types().iter().map(print_type)),
        ],
        &mut output,
    );
    output
}

pub fn print_type(ty: &Type) -> String {
    match ty {
        Type::Enum(e) => print_enum_type(e),
        Type::Message(m) => print_message_type(m),
    }
}

/// Renders several types, separated by blank lines.
pub fn print_all(types: &[Type]) -> String {
    separated(types.iter().map(print_type))
}

pub fn print_rpc(rpc: &Rpc) -> String {
    let mut output = String::new();
    write_documentation(rpc.documentation(), &mut output);

    let mut signature = format!("rpc {} (", rpc.name());
    if rpc.is_client_streaming() {
        signature.push_str("stream ");
    }
    signature.push_str(rpc.request_type());
    signature.push_str(") returns (");
    if rpc.is_server_streaming() {
        signature.push_str("stream ");
    }
    signature.push_str(rpc.response_type());
    signature.push(')');

    if rpc.options().is_empty() {
        output.push_str(&signature);
        output.push_str(";\n");
    } else {
        write_block(&signature, &[option_statements(rpc.options())], &mut output);
    }
    output
}

pub fn print_service(service: &Service) -> String {
    let mut output = String::new();
    write_documentation(service.documentation(), &mut output);
    write_block(
        &format!("service {}", service.name()),
        &[
            option_statements(service.options()),
            service.rpcs().iter().map(print_rpc).collect::<String>(),
        ],
        &mut output,
    );
    output
}

/// Renders a whole file: header (path comment, syntax, package), imports,
/// file options, then each type, extend block and service, with one blank
/// line between sections.
pub fn print_file(file: &ProtoFile) -> String {
    let mut header = String::new();
    if !file.file_name().is_empty() {
        header.push_str("// ");
        header.push_str(file.file_name());
        header.push('\n');
    }
    if let Some(syntax) = file.syntax() {
        header.push_str(&format!("syntax = \"{syntax}\";\n"));
    }
    if let Some(package) = file.package_name() {
        header.push_str(&format!("package {package};\n"));
    }

    let mut imports = String::new();
    for dependency in file.dependencies() {
        imports.push_str("import ");
        write_quoted(dependency, &mut imports);
        imports.push_str(";\n");
    }
    for dependency in file.public_dependencies() {
        imports.push_str("import public ");
        write_quoted(dependency, &mut imports);
        imports.push_str(";\n");
    }

    let sections = [header, imports, option_statements(file.options())]
        .into_iter()
        .chain(file.types().iter().map(print_type))
        .chain(file.extend_declarations().iter().map(print_extend))
        .chain(file.services().iter().map(print_service));
    separated(sections)
}

/// Writes `header {`, the non-empty sections indented one level with a blank
/// line between them, and `}`. With no content this is `header {}`.
fn write_block(header: &str, sections: &[String], output: &mut String) {
    output.push_str(header);

    let mut body = sections.iter().filter(|s| !s.is_empty()).peekable();
    if body.peek().is_none() {
        output.push_str(" {}\n");
        return;
    }

    output.push_str(" {\n");
    for (i, section) in body.enumerate() {
        if i > 0 {
            output.push('\n');
        }
        append_indented(section, output);
    }
    output.push_str("}\n");
}

/// Joins the non-empty renderings with one blank line between each.
fn separated(items: impl Iterator<Item = String>) -> String {
    let mut output = String::new();
    for item in items.filter(|s| !s.is_empty()) {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&item);
    }
    output
}

fn append_indented(text: &str, output: &mut String) {
    for line in text.lines() {
        if !line.is_empty() {
            output.push_str(INDENT);
            output.push_str(line);
        }
        output.push('\n');
    }
}

fn write_documentation(documentation: &str, output: &mut String) {
    for line in documentation.lines() {
        if line.is_empty() {
            output.push_str("//\n");
        } else {
            output.push_str("// ");
            output.push_str(line);
            output.push('\n');
        }
    }
}

/// Declaration-level options: one `option name = value;` line each.
fn option_statements(options: &[OptionElement]) -> String {
    let mut output = String::new();
    for option in options {
        output.push_str("option ");
        write_option(option, &mut output);
        output.push_str(";\n");
    }
    output
}

/// Field and enum value options: ` [` then one option per line, `]`.
fn write_inline_options(options: &[OptionElement], output: &mut String) {
    if options.is_empty() {
        return;
    }
    output.push_str(" [\n");
    for (i, option) in options.iter().enumerate() {
        let mut line = print_option(option);
        if i + 1 < options.len() {
            line.push(',');
        }
        append_indented(&line, output);
    }
    output.push(']');
}

fn write_option(option: &OptionElement, output: &mut String) {
    if option.is_parenthesized() {
        output.push('(');
        output.push_str(option.name());
        output.push(')');
    } else {
        output.push_str(option.name());
    }

    match option.value() {
        OptionValue::Option(nested) => {
            output.push('.');
            write_option(nested, output);
        }
        value => {
            output.push_str(" = ");
            write_option_value(value, output);
        }
    }
}

fn write_option_value(value: &OptionValue, output: &mut String) {
    match value {
        OptionValue::String(s) => write_quoted(s, output),
        OptionValue::Identifier(s) | OptionValue::Float(s) => output.push_str(s),
        OptionValue::Integer(n) => output.push_str(&n.to_string()),
        OptionValue::Boolean(b) => output.push_str(if *b { "true" } else { "false" }),
        OptionValue::Option(nested) => write_option(nested, output),
        OptionValue::Map(entries) => {
            let items = entries.iter().map(|(key, value)| {
                let mut entry = format!("{key}: ");
                write_option_value(value, &mut entry);
                entry
            });
            write_delimited('{', '}', items, output);
        }
        OptionValue::List(values) => {
            let items = values.iter().map(|value| {
                let mut item = String::new();
                write_option_value(value, &mut item);
                item
            });
            write_delimited('[', ']', items, output);
        }
    }
}

/// Writes `open`, each item on its own indented line separated by commas,
/// then `close`. No items gives `{}` / `[]`.
fn write_delimited(
    open: char,
    close: char,
    items: impl ExactSizeIterator<Item = String>,
    output: &mut String,
) {
    output.push(open);
    let count = items.len();
    if count > 0 {
        output.push('\n');
        for (i, mut item) in items.enumerate() {
            if i + 1 < count {
                item.push(',');
            }
            append_indented(&item, output);
        }
    }
    output.push(close);
}

/// Writes `s` as a double-quoted literal. ASCII control characters without
/// a short escape are written as `\xNN`.
fn write_quoted(s: &str, output: &mut String) {
    output.push('"');
    for c in s.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c.is_ascii_control() => output.push_str(&format!("\\x{:02x}", u32::from(c))),
            c => output.push(c),
        }
    }
    output.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Label, Syntax};

    fn opt(name: &str, value: impl Into<OptionValue>) -> OptionElement {
        OptionElement::new(name, value).unwrap()
    }

    fn make_value(name: &str, tag: i32) -> EnumValue {
        EnumValue::new(name, tag, "", vec![]).unwrap()
    }

    fn make_field(label: Label, type_name: &str, name: &str, tag: i32) -> Field {
        Field::new(label, type_name, name, tag, "", vec![]).unwrap()
    }

    fn make_message(name: &str, fields: Vec<Field>, nested: Vec<Type>) -> MessageType {
        MessageType::new(name, "", "", vec![], fields, nested).unwrap()
    }

    #[test]
    fn print_enum_value_with_documentation() {
        let value = EnumValue::new("NAME", 1, "Hello", vec![]).unwrap();
        assert_eq!(print_enum_value(&value), "// Hello\nNAME = 1;\n");
    }

    #[test]
    fn print_enum_value_with_two_options() {
        let value = EnumValue::new(
            "NAME",
            1,
            "",
            vec![opt("kit", "kat"), opt("deprecated", true)],
        )
        .unwrap();
        assert_eq!(
            print_enum_value(&value),
            "NAME = 1 [\n  kit = \"kat\",\n  deprecated = true\n];\n"
        );
    }

    #[test]
    fn print_negative_tag() {
        assert_eq!(print_enum_value(&make_value("NEG", -1)), "NEG = -1;\n");
    }

    #[test]
    fn print_enum_with_options_and_no_values() {
        let e = EnumType::new("E", "", "", vec![opt("allow_alias", true)], vec![]).unwrap();
        assert_eq!(print_enum_type(&e), "enum E {\n  option allow_alias = true;\n}\n");
    }

    #[test]
    fn print_enum_value_options_inside_enum() {
        let e = EnumType::new(
            "E",
            "",
            "",
            vec![],
            vec![EnumValue::new("A", 0, "First.", vec![opt("deprecated", true)]).unwrap()],
        )
        .unwrap();
        assert_eq!(
            print_enum_type(&e),
            "enum E {\n  // First.\n  A = 0 [\n    deprecated = true\n  ];\n}\n"
        );
    }

    #[test]
    fn print_multiline_documentation() {
        let e = EnumType::new("E", "", "Line one.\n\nLine three.", vec![], vec![]).unwrap();
        assert_eq!(
            print_enum_type(&e),
            "// Line one.\n//\n// Line three.\nenum E {}\n"
        );
    }

    #[test]
    fn print_field_labels() {
        assert_eq!(
            print_field(&make_field(Label::Required, "int32", "id", 1)),
            "required int32 id = 1;\n"
        );
        assert_eq!(
            print_field(&make_field(Label::Repeated, "acme.Tag", "tags", 2)),
            "repeated acme.Tag tags = 2;\n"
        );
        assert_eq!(
            print_field(&make_field(Label::Singular, "string", "name", 3)),
            "string name = 3;\n"
        );
    }

    #[test]
    fn print_field_with_options_and_doc() {
        let field = Field::new(
            Label::Optional,
            "int32",
            "count",
            4,
            "How many.",
            vec![opt("default", 5), opt("deprecated", true)],
        )
        .unwrap();
        assert_eq!(
            print_field(&field),
            "// How many.\noptional int32 count = 4 [\n  default = 5,\n  deprecated = true\n];\n"
        );
    }

    #[test]
    fn print_empty_message() {
        assert_eq!(
            print_message_type(&make_message("Empty", vec![], vec![])),
            "message Empty {}\n"
        );
    }

    #[test]
    fn print_message_with_options_and_fields() {
        let m = MessageType::new(
            "Contact",
            "",
            "A person.",
            vec![opt("deprecated", true)],
            vec![
                make_field(Label::Required, "string", "name", 1),
                make_field(Label::Optional, "string", "email", 2),
            ],
            vec![],
        )
        .unwrap();
        assert_eq!(
            print_message_type(&m),
            "// A person.\n\
             message Contact {\n\
             \x20 option deprecated = true;\n\
             \n\
             \x20 required string name = 1;\n\
             \x20 optional string email = 2;\n\
             }\n"
        );
    }

    #[test]
    fn print_nested_message_indents_recursively() {
        let inner = make_message(
            "Inner",
            vec![make_field(Label::Optional, "int32", "x", 1)],
            vec![EnumType::new("Mode", "", "", vec![], vec![make_value("ON", 1)])
                .unwrap()
                .into()],
        );
        let outer = make_message(
            "Outer",
            vec![make_field(Label::Optional, "Inner", "inner", 1)],
            vec![inner.into()],
        );
        assert_eq!(
            print_message_type(&outer),
            "message Outer {\n\
             \x20 optional Inner inner = 1;\n\
             \n\
             \x20 message Inner {\n\
             \x20   optional int32 x = 1;\n\
             \n\
             \x20   enum Mode {\n\
             \x20     ON = 1;\n\
             \x20   }\n\
             \x20 }\n\
             }\n"
        );
    }

    #[test]
    fn print_nested_types_separated_by_blank_line() {
        let outer = make_message(
            "Outer",
            vec![],
            vec![
                make_message("A", vec![], vec![]).into(),
                make_message("B", vec![], vec![]).into(),
            ],
        );
        assert_eq!(
            print_message_type(&outer),
            "message Outer {\n  message A {}\n\n  message B {}\n}\n"
        );
    }

    #[test]
    fn print_message_with_oneof_and_extensions() {
        let m = make_message(
            "Shape",
            vec![make_field(Label::Optional, "string", "name", 1)],
            vec![],
        )
        .with_one_ofs(vec![OneOf::new(
            "kind",
            "",
            vec![
                make_field(Label::Singular, "Circle", "circle", 2),
                make_field(Label::Singular, "Square", "square", 3),
            ],
        )
        .unwrap()])
        .with_extensions(vec![
            ExtensionRange::new("", 100, 199).unwrap(),
            ExtensionRange::single("", 500),
            ExtensionRange::new("", 1000, MAX_TAG).unwrap(),
        ]);
        assert_eq!(
            print_message_type(&m),
            "message Shape {\n\
             \x20 optional string name = 1;\n\
             \n\
             \x20 oneof kind {\n\
             \x20   Circle circle = 2;\n\
             \x20   Square square = 3;\n\
             \x20 }\n\
             \n\
             \x20 extensions 100 to 199;\n\
             \x20 extensions 500;\n\
             \x20 extensions 1000 to max;\n\
             }\n"
        );
    }

    #[test]
    fn print_extend_block() {
        let extend = ExtendDeclaration::new(
            "Foo",
            "acme.Foo",
            "Adds bar.",
            vec![make_field(Label::Optional, "int32", "bar", 100)],
        )
        .unwrap();
        assert_eq!(
            print_extend(&extend),
            "// Adds bar.\nextend Foo {\n  optional int32 bar = 100;\n}\n"
        );
    }

    #[test]
    fn print_type_dispatches() {
        let e = EnumType::new("E", "", "", vec![], vec![]).unwrap();
        assert_eq!(print_type(&Type::Enum(e)), "enum E {}\n");
        let m = make_message("M", vec![], vec![]);
        assert_eq!(print_type(&Type::Message(m)), "message M {}\n");
    }

    #[test]
    fn print_all_types() {
        let types = vec![
            Type::from(EnumType::new("E", "", "", vec![], vec![]).unwrap()),
            Type::from(make_message("M", vec![], vec![])),
        ];
        assert_eq!(print_all(&types), "enum E {}\n\nmessage M {}\n");
    }

    #[test]
    fn print_string_escapes() {
        let o = opt("note", "say \"hi\"\\\n");
        assert_eq!(print_option(&o), r#"note = "say \"hi\"\\\n""#);
    }

    #[test]
    fn print_control_character_escapes() {
        let o = opt("note", "a\rb\tc\u{0}d\u{7f}é");
        assert_eq!(print_option(&o), r#"note = "a\rb\tc\x00d\x7fé""#);

        let mut output = String::new();
        write_quoted("\u{1b}[0m", &mut output);
        assert_eq!(output, r#""\x1b[0m""#);
    }

    #[test]
    fn print_map_option() {
        let o = OptionElement::custom(
            "validate.rules",
            OptionValue::Map(vec![
                ("min_len".into(), OptionValue::Integer(1)),
                ("pattern".into(), "^a".into()),
                (
                    "nested".into(),
                    OptionValue::Map(vec![("deep".into(), OptionValue::Boolean(false))]),
                ),
                (
                    "in".into(),
                    OptionValue::List(vec![
                        OptionValue::Identifier("A".into()),
                        OptionValue::Identifier("B".into()),
                    ]),
                ),
            ]),
        )
        .unwrap();
        assert_eq!(
            print_option(&o),
            "(validate.rules) = {\n\
             \x20 min_len: 1,\n\
             \x20 pattern: \"^a\",\n\
             \x20 nested: {\n\
             \x20   deep: false\n\
             \x20 },\n\
             \x20 in: [\n\
             \x20   A,\n\
             \x20   B\n\
             \x20 ]\n\
             }"
        );
    }

    #[test]
    fn print_empty_map_and_list() {
        assert_eq!(print_option(&opt("m", OptionValue::Map(vec![]))), "m = {}");
        assert_eq!(print_option(&opt("l", OptionValue::List(vec![]))), "l = []");
    }

    #[test]
    fn print_map_option_on_message_is_indented() {
        let m = MessageType::new(
            "M",
            "",
            "",
            vec![OptionElement::custom(
                "cfg",
                OptionValue::Map(vec![("a".into(), OptionValue::Integer(1))]),
            )
            .unwrap()],
            vec![],
            vec![],
        )
        .unwrap();
        assert_eq!(
            print_message_type(&m),
            "message M {\n  option (cfg) = {\n    a: 1\n  };\n}\n"
        );
    }

    #[test]
    fn print_rpcs_and_service() {
        let unary = Rpc::new("SayHello", "Greets.", "HelloRequest", "HelloReply", vec![]).unwrap();
        let streaming = Rpc::new("Chat", "", "Msg", "Msg", vec![opt("deprecated", true)])
            .unwrap()
            .with_streaming(true, true);
        assert_eq!(
            print_rpc(&unary),
            "// Greets.\nrpc SayHello (HelloRequest) returns (HelloReply);\n"
        );
        assert_eq!(
            print_rpc(&streaming),
            "rpc Chat (stream Msg) returns (stream Msg) {\n  option deprecated = true;\n}\n"
        );

        let service = Service::new(
            "Greeter",
            "",
            "",
            vec![opt("deprecated", false)],
            vec![unary, streaming],
        )
        .unwrap();
        assert_eq!(
            print_service(&service),
            "service Greeter {\n\
             \x20 option deprecated = false;\n\
             \n\
             \x20 // Greets.\n\
             \x20 rpc SayHello (HelloRequest) returns (HelloReply);\n\
             \x20 rpc Chat (stream Msg) returns (stream Msg) {\n\
             \x20   option deprecated = true;\n\
             \x20 }\n\
             }\n"
        );
    }

    #[test]
    fn print_empty_service() {
        let service = Service::new("Empty", "", "", vec![], vec![]).unwrap();
        assert_eq!(print_service(&service), "service Empty {}\n");
    }

    #[test]
    fn print_full_file() {
        let file = ProtoFile::new("acme/shop.proto")
            .with_syntax(Syntax::Proto2)
            .with_package("acme.shop")
            .with_dependencies(vec!["acme/base.proto".into()], vec!["acme/common.proto".into()])
            .with_options(vec![opt("java_package", "com.acme.shop")])
            .with_types(vec![
                EnumType::new("Size", "acme.shop.Size", "", vec![], vec![make_value("SMALL", 1)])
                    .unwrap()
                    .into(),
                make_message(
                    "Item",
                    vec![make_field(Label::Optional, "Size", "size", 1)],
                    vec![],
                )
                .with_extensions(vec![ExtensionRange::new("", 100, 199).unwrap()])
                .into(),
            ])
            .with_extend_declarations(vec![ExtendDeclaration::new(
                "Item",
                "acme.shop.Item",
                "",
                vec![make_field(Label::Optional, "string", "note", 100)],
            )
            .unwrap()])
            .with_services(vec![Service::new(
                "Shop",
                "",
                "",
                vec![],
                vec![Rpc::new("Buy", "", "Item", "Item", vec![]).unwrap()],
            )
            .unwrap()]);

        assert_eq!(
            print_file(&file),
            "// acme/shop.proto\n\
             syntax = \"proto2\";\n\
             package acme.shop;\n\
             \n\
             import \"acme/base.proto\";\n\
             import public \"acme/common.proto\";\n\
             \n\
             option java_package = \"com.acme.shop\";\n\
             \n\
             enum Size {\n\
             \x20 SMALL = 1;\n\
             }\n\
             \n\
             message Item {\n\
             \x20 optional Size size = 1;\n\
             \n\
             \x20 extensions 100 to 199;\n\
             }\n\
             \n\
             extend Item {\n\
             \x20 optional string note = 100;\n\
             }\n\
             \n\
             service Shop {\n\
             \x20 rpc Buy (Item) returns (Item);\n\
             }\n"
        );
    }

    #[test]
    fn print_file_without_header() {
        let file = ProtoFile::new("")
            .with_types(vec![make_message("M", vec![], vec![]).into()]);
        assert_eq!(print_file(&file), "message M {}\n");
        assert_eq!(print_file(&ProtoFile::new("")), "");
    }
}
