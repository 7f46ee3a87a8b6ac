use serde::Serialize;

/// Template data for one `interface` declaration.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct InterfaceData {
    pub(crate) comment: String,
    pub(crate) export: bool,
    pub(crate) name: String,
    pub(crate) fields: Vec<FieldData>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct FieldData {
    pub(crate) comment: String,
    pub(crate) indent: String,
    pub(crate) key: String,
    pub(crate) marker: &'static str,
    pub(crate) sig: String,
}

/// Template data for one union `type` declaration.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct EnumData {
    pub(crate) comment: String,
    pub(crate) export: bool,
    pub(crate) name: String,
    pub(crate) body: String,
}
