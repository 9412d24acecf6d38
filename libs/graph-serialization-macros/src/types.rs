use syn::{GenericArgument, PathArguments, Type};

/// Scalars returned by value from generated getters.
const COPY_TYPES: &[&str] = &[
    "bool",
    "i32",
    "i64",
    "f64",
    "Uuid",
    "NaiveDate",
    "NaiveTime",
    "IsoDuration",
];

/// How a generated getter exposes an `Option<T>` property.
pub enum Getter<'a> {
    /// `Option<T>`
    Copy,
    /// `Option<&str>`
    Str,
    /// `Option<&[E]>`
    Slice(&'a Type),
    /// `Option<&T>`
    Ref,
}

fn last_segment_args<'a>(ty: &'a Type, name: &str) -> Option<&'a Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let segment = path.path.segments.last()?;
    if segment.ident != name {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

fn last_ident(ty: &Type) -> Option<String> {
    let Type::Path(path) = ty else {
        return None;
    };
    path.path.segments.last().map(|s| s.ident.to_string())
}

/// `T` for `Option<T>`.
pub fn option_inner(ty: &Type) -> Option<&Type> {
    last_segment_args(ty, "Option")
}

pub fn getter_for(ty: &Type) -> Getter<'_> {
    if let Some(element) = last_segment_args(ty, "Vec") {
        return Getter::Slice(element);
    }
    match last_ident(ty).as_deref() {
        Some("String") => Getter::Str,
        Some(name) if COPY_TYPES.contains(&name) => Getter::Copy,
        _ => Getter::Ref,
    }
}
