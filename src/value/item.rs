

#[derive(Default, Clone)]
pub enum Value {
    #[default] Nil,                     // type_id = 0
    Int(i64),                           //           1
    Money(BigInt),                      //           2
    Str(String),                        //           3
    Bool(bool),                         //           4
    Block(Arc<obj::Block>),             //           5
    Extern(Arc<ExternFuncInfo>),        //           6
    Opaque(Arc<dyn Any + Send + Sync>), //           7
    Map(BTreeMap<String, Value>),       //           8
}


use Value::*;

impl Value {

    pub fn ty(&self) -> ValueTy {
        match self {
            Nil        => ValueTy::Nil,
            Int(..)    => ValueTy::Int,
            Money(..)  => ValueTy::Money,
            Str(..)    => ValueTy::Str,
            Bool(..)   => ValueTy::Bool,
            Block(..)  => ValueTy::Block,
            Extern(..) => ValueTy::Extern,
            Opaque(..) => ValueTy::Opaque,
            Map(..)    => ValueTy::Map,
        }
    }

    pub fn nil() -> Self {
        Nil
    }

    pub fn int(n: i64) -> Self {
        Int(n)
    }

    pub fn money(n: i64) -> Self {
        Money(BigInt::from(n))
    }

    pub fn str(s: impl Into<String>) -> Self {
        Str(s.into())
    }

    pub fn bool(b: bool) -> Self {
        Bool(b)
    }

    pub fn map() -> Self {
        Map(BTreeMap::new())
    }

    pub fn is_nil(&self) -> bool {
        match self {
            Nil => true,
            _ => false,
        }
    }

    pub fn is_int(&self) -> bool {
        match self {
            Int(..) => true,
            _ => false,
        }
    }

    pub fn is_money(&self) -> bool {
        match self {
            Money(..) => true,
            _ => false,
        }
    }

    pub fn is_str(&self) -> bool {
        match self {
            Str(..) => true,
            _ => false,
        }
    }

    pub fn is_map(&self) -> bool {
        match self {
            Map(..) => true,
            _ => false,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Nil => serde_json::Value::Null,
            Int(n) => (*n).into(),
            Money(m) => serde_json::Value::String(m.to_string()),
            Str(s) => s.clone().into(),
            Bool(b) => (*b).into(),
            Map(m) => serde_json::Value::Object(
                m.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
            other => serde_json::Value::String(format!("{}", other)),
        }
    }
}


impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Nil => Ok(()),
            Int(n) => write!(f, "{}", n),
            Money(m) => write!(f, "{}", m),
            Str(s) => write!(f, "{}", s),
            Bool(b) => write!(f, "{}", b),
            Block(..) => write!(f, "[compiled block]"),
            Extern(x) => write!(f, "[extern {}]", x.name),
            Opaque(..) => write!(f, "[host object]"),
            Map(..) => write!(f, "{}", self.to_json()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Nil => write!(f, "Nil"),
            Int(n) => write!(f, "Int({})", n),
            Money(m) => write!(f, "Money({})", m),
            Str(s) => write!(f, "Str({:?})", s),
            Bool(b) => write!(f, "Bool({})", b),
            Block(..) => write!(f, "Block(..)"),
            Extern(x) => write!(f, "Extern({})", x.name),
            Opaque(..) => write!(f, "Opaque(..)"),
            Map(m) => f.debug_tuple("Map").field(m).finish(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Nil, Nil) => true,
            (Int(a), Int(b)) => a == b,
            (Money(a), Money(b)) => a == b,
            (Str(a), Str(b)) => a == b,
            (Bool(a), Bool(b)) => a == b,
            (Block(a), Block(b)) => Arc::ptr_eq(a, b),
            (Extern(a), Extern(b)) => Arc::ptr_eq(a, b),
            (Opaque(a), Opaque(b)) => Arc::ptr_eq(a, b),
            (Map(a), Map(b)) => a == b,
            _ => false,
        }
    }
}
