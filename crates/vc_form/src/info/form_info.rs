use core::any::{Any, TypeId, type_name};
use core::fmt;

use crate::info::{ArrayInfo, ListInfo, MapInfo, OptionalInfo, RecordInfo, ScalarInfo};

// -----------------------------------------------------------------------------
// Type

/// Identity and readable path of a type.
#[derive(Debug, Clone, Copy)]
pub struct Type {
    id: TypeId,
    path: &'static str,
}

impl Type {
    #[inline]
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: type_name::<T>(),
        }
    }

    #[inline]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// The path reported by [`core::any::type_name`], used in error messages.
    #[inline]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    #[inline]
    pub fn is<T: Any + ?Sized>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

// -----------------------------------------------------------------------------
// FormKind

/// The variant of a [`FormInfo`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Record,
    List,
    Array,
    Map,
    Optional,
    Dynamic,
    Scalar,
    Text,
    Opaque,
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Record => "record",
            Self::List => "list",
            Self::Array => "array",
            Self::Map => "map",
            Self::Optional => "optional",
            Self::Dynamic => "dynamic",
            Self::Scalar => "scalar",
            Self::Text => "text",
            Self::Opaque => "opaque",
        })
    }
}

// -----------------------------------------------------------------------------
// FormInfo

/// The closed description of a type, consulted by both engines.
///
/// `Text` marks a type that supplies its own text codec through
/// [`FormText`](crate::FormText). It wins over every structural variant: a
/// record-shaped type described as `Text` is written and read as one leaf.
///
/// `Opaque` marks a kind the codec cannot represent, `()` for instance.
/// Reaching one during a decode or encode is a type error.
#[derive(Debug)]
pub enum FormInfo {
    Record(RecordInfo),
    List(ListInfo),
    Array(ArrayInfo),
    Map(MapInfo),
    Optional(OptionalInfo),
    Dynamic(Type),
    Scalar(ScalarInfo),
    Text(Type),
    Opaque(Type),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Return the [`", stringify!($info), "`] if this is a `", stringify!($kind), "`.")]
        #[inline]
        pub const fn $name(&self) -> Option<&$info> {
            match self {
                Self::$kind(info) => Some(info),
                _ => None,
            }
        }
    };
}

impl FormInfo {
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Record(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Array(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Optional(info) => info.ty(),
            Self::Scalar(info) => info.ty(),
            Self::Dynamic(ty) | Self::Text(ty) | Self::Opaque(ty) => ty,
        }
    }

    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.ty().id()
    }

    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    pub const fn kind(&self) -> FormKind {
        match self {
            Self::Record(_) => FormKind::Record,
            Self::List(_) => FormKind::List,
            Self::Array(_) => FormKind::Array,
            Self::Map(_) => FormKind::Map,
            Self::Optional(_) => FormKind::Optional,
            Self::Dynamic(_) => FormKind::Dynamic,
            Self::Scalar(_) => FormKind::Scalar,
            Self::Text(_) => FormKind::Text,
            Self::Opaque(_) => FormKind::Opaque,
        }
    }

    impl_cast_method!(as_record: Record => RecordInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_array: Array => ArrayInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_optional: Optional => OptionalInfo);
    impl_cast_method!(as_scalar: Scalar => ScalarInfo);
}
