use std::collections::{HashMap, HashSet, VecDeque};

use handlebars::Handlebars;
use log::trace;

use crate::{
    CodegenResult,
    case::{get_indent, property_key, type_name},
    options::GenerationOptions,
    render::{generate_comment, remove_comment},
    schema_node::{NodeKind, SchemaNode},
    typegen::schema_data::{EnumData, FieldData, InterfaceData},
};

static INTERFACE_TEMPLATE: &str = include_str!("./interface.handlebars");
static ENUM_TEMPLATE: &str = include_str!("./enum.handlebars");

/// State of one generation run.
///
/// Enum declarations are pushed to the front of `declarations`, interfaces to
/// the back in pre-order, so the finished list reads enums first.
pub(crate) struct Transformer<'o> {
    options: &'o GenerationOptions,
    registry: Handlebars<'static>,
    declarations: VecDeque<String>,
    seen: HashSet<String>,
    // distinct enum bodies per declaration name, drives the numeric suffix
    enum_occurrence: HashMap<String, usize>,
    enum_names: HashMap<(String, String), String>,
    // every enum name handed out, bare or suffixed
    taken_enum_names: HashSet<String>,
    interfaces: usize,
    enums: usize,
}

pub(crate) struct TransformOutput {
    pub(crate) declarations: Vec<String>,
    pub(crate) interfaces: usize,
    pub(crate) enums: usize,
}

impl<'o> Transformer<'o> {
    pub(crate) fn new(options: &'o GenerationOptions) -> CodegenResult<Self> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.register_template_string("interface", INTERFACE_TEMPLATE)?;
        registry.register_template_string("enum", ENUM_TEMPLATE)?;

        Ok(Self {
            options,
            registry,
            declarations: VecDeque::new(),
            seen: HashSet::new(),
            enum_occurrence: HashMap::new(),
            enum_names: HashMap::new(),
            taken_enum_names: HashSet::new(),
            interfaces: 0,
            enums: 0,
        })
    }

    /// Walks `node` and everything below it, naming its interface after `name`.
    pub(crate) fn visit(&mut self, node: &SchemaNode, name: &str) -> CodegenResult<()> {
        let interface = self.render_interface(node, name)?;
        let canonical = self.canonical_key(&interface);
        if self.seen.insert(canonical) {
            trace!("emitting interface {}{}", self.options.prefix, type_name(name));
            self.declarations.push_back(interface);
            self.interfaces += 1;
        }

        for (key, prop) in node.properties() {
            if self.options.is_ignored(key) {
                continue;
            }

            let kind = prop.kind();
            if let NodeKind::Enum { body } = &kind {
                let declaration = self.render_enum(prop, key, body)?;
                let canonical = self.canonical_key(&declaration);
                if self.seen.insert(canonical) {
                    trace!("emitting enum for `{key}`");
                    self.declarations.push_front(declaration);
                    self.enums += 1;
                }
            }

            // declared properties are walked whatever the `type` says
            if kind.is_obj() || prop.has_properties() {
                self.visit(prop, key)?;
            }
            if let Some(items) = prop
                .items
                .as_deref()
                .filter(|items| items.kind().is_obj() || items.has_properties())
            {
                self.visit(items, key)?;
            }
        }

        Ok(())
    }

    pub(crate) fn finish(self) -> TransformOutput {
        TransformOutput {
            declarations: self.declarations.into(),
            interfaces: self.interfaces,
            enums: self.enums,
        }
    }

    /// Field type of `prop` as written inside an interface body.
    fn resolve_type(&mut self, prop: &SchemaNode, key: &str) -> String {
        match prop.kind() {
            NodeKind::Primitive(primitive) => primitive.to_string(),
            NodeKind::Enum { body } => self.enum_name(key, &body),
            NodeKind::Object => format!("{}{}", self.options.prefix, type_name(key)),
            NodeKind::Array => format!("{}{}[]", self.options.prefix, type_name(key)),
            NodeKind::Unknown => "any".into(),
        }
    }

    /// Name of the enum declared for `key` with union `body`.
    ///
    /// The first body seen under a name keeps it bare, later distinct bodies
    /// get `1`, `2`, ... appended. Repeated bodies reuse their earlier name.
    /// A suffix already owned by another key (`status1`) is skipped.
    fn enum_name(&mut self, key: &str, body: &str) -> String {
        let base = format!("{}{}", self.options.enum_prefix, type_name(key));
        let id = (base.clone(), body.to_string());
        if let Some(name) = self.enum_names.get(&id) {
            return name.clone();
        }

        let mut suffix = self.enum_occurrence.get(&base).copied().unwrap_or(0);
        let mut name = if suffix == 0 {
            base.clone()
        } else {
            format!("{base}{suffix}")
        };
        while self.taken_enum_names.contains(&name) {
            suffix += 1;
            name = format!("{base}{suffix}");
        }
        self.enum_occurrence.insert(base, suffix + 1);

        self.taken_enum_names.insert(name.clone());
        self.enum_names.insert(id, name.clone());
        name
    }

    fn render_interface(&mut self, node: &SchemaNode, name: &str) -> CodegenResult<String> {
        let indent = self.options.indent;
        let marker = if self.options.optional { "?" } else { "" };

        let mut fields = vec![];
        for (key, prop) in node.properties() {
            if self.options.is_ignored(key) {
                continue;
            }
            fields.push(FieldData {
                comment: self.comment(prop, indent),
                indent: get_indent(indent),
                key: property_key(key),
                marker,
                sig: self.resolve_type(prop, key),
            });
        }

        let data = InterfaceData {
            comment: self.comment(node, 0),
            export: self.options.export,
            name: format!("{}{}", self.options.prefix, type_name(name)),
            fields,
        };
        Ok(self.registry.render("interface", &data)?)
    }

    fn render_enum(&mut self, prop: &SchemaNode, key: &str, body: &str) -> CodegenResult<String> {
        let data = EnumData {
            comment: self.comment(prop, 0),
            export: self.options.export,
            name: self.enum_name(key, body),
            body: body.to_string(),
        };
        Ok(self.registry.render("enum", &data)?)
    }

    fn comment(&self, node: &SchemaNode, indent: usize) -> String {
        if self.options.gen_comment {
            generate_comment(node, indent)
        } else {
            String::new()
        }
    }

    fn canonical_key(&self, declaration: &str) -> String {
        if self.options.gen_comment {
            remove_comment(declaration)
        } else {
            declaration.to_string()
        }
    }
}
