

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueTy {
    #[default] Nil,
    Int,
    Money,
    Str,
    Bool,
    Block,
    Extern,
    Opaque,
    Map,
    Slice,   // variadic tail descriptor
    Runtime, // runtime-handle auto-parameter
}

impl ValueTy {

    /// Type-name key used by the auto-parameter registration mapping.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Nil     => "nil",
            Self::Int     => "int",
            Self::Money   => "money",
            Self::Str     => "string",
            Self::Bool    => "bool",
            Self::Block   => "block",
            Self::Extern  => "extfunc",
            Self::Opaque  => "handle",
            Self::Map     => "map",
            Self::Slice   => "slice",
            Self::Runtime => "*scriptvm::Runtime",
        }
    }

    /// Default used when an optional schema field is absent.
    pub fn zero_value(&self) -> Value {
        match self {
            Self::Int   => Value::Int(0),
            Self::Money => Value::Money(BigInt::from(0)),
            Self::Str   => Value::Str(String::new()),
            Self::Bool  => Value::Bool(false),
            Self::Map   => Value::Map(BTreeMap::new()),
            _           => Value::Nil,
        }
    }
}
