use std::fmt;

use serde::Serialize;

/// Name of the library a group of functions originates from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Group(&'static str);

impl Group {
    /// Windowing / application functions (`sapp_*`).
    pub const APP: Group = Group("app");
    /// Graphics functions (`sg_*`).
    pub const GFX: Group = Group("gfx");
    /// Glue between the two (`sapp_sgcontext`).
    pub const GLUE: Group = Group("glue");

    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn name(self) -> &'static str {
        self.0
    }

    /// Resolves one of the built-in sokol groups by name.
    pub fn builtin(name: &str) -> Option<Self> {
        [Self::APP, Self::GFX, Self::GLUE]
            .into_iter()
            .find(|group| group.0.eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A type as spelled in the table, kept for display and listings only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TypeRef(&'static str);

impl TypeRef {
    pub const UNIT: TypeRef = TypeRef("()");

    pub const fn new(spelling: &'static str) -> Self {
        Self(spelling)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }

    pub fn is_unit(self) -> bool {
        self.0 == "()"
    }

    pub fn is_pointer(self) -> bool {
        self.0.starts_with("*const") || self.0.starts_with("*mut")
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

impl Param {
    pub const fn new(name: &'static str, ty: TypeRef) -> Self {
        Self { name, ty }
    }
}

/// Name and signature of one forwarded function.
///
/// Descriptors are process-lifetime constants; the name is the join key
/// between a binding slot and the shared library's export table.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct FunctionDescriptor {
    name: &'static str,
    group: Group,
    #[serde(rename = "returns")]
    ret: TypeRef,
    params: &'static [Param],
}

impl FunctionDescriptor {
    pub const fn new(
        name: &'static str,
        group: Group,
        ret: TypeRef,
        params: &'static [Param],
    ) -> Self {
        Self {
            name,
            group,
            ret,
            params,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn group(&self) -> Group {
        self.group
    }

    pub const fn return_type(&self) -> TypeRef {
        self.ret
    }

    pub const fn params(&self) -> &'static [Param] {
        self.params
    }

    pub const fn arity(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Display for FunctionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn {}(", self.name)?;
        for (index, param) in self.params.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", param.name, param.ty)?;
        }
        f.write_str(")")?;
        if !self.ret.is_unit() {
            write!(f, " -> {}", self.ret)?;
        }
        Ok(())
    }
}
