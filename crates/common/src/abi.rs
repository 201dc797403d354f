//! ABI related helper functions.

use alloy_dyn_abi::{DynSolType, DynSolValue};
use alloy_primitives::{hex, keccak256, Address, Selector, I256, U256};
use eyre::{Context, Result};

/// Splits a function signature of the form `name(type1,type2,...)` into the
/// function name and its comma-separated parameter type tags.
///
/// The trailing `)` is implicit: the last character of the signature is always
/// dropped when extracting the parameter list. A signature without a `(` is
/// rejected.
pub fn parse_signature(sig: &str) -> Result<(&str, Vec<&str>)> {
    let Some(name_end) = sig.find('(') else {
        eyre::bail!("invalid function signature `{sig}`");
    };
    let name = &sig[..name_end];
    let params = sig.get(name_end + 1..sig.len() - 1).unwrap_or("");
    let types = if params.is_empty() { Vec::new() } else { params.split(',').collect() };
    Ok((name, types))
}

/// Computes the 4-byte selector of `sig`.
///
/// The signature is hashed exactly as given; no canonicalization is applied.
pub fn selector(sig: &str) -> Selector {
    Selector::from_slice(&keccak256(sig)[..4])
}

/// Coerces a textual argument to a [`DynSolValue`] of the given type.
///
/// Integers are parsed as base-10, addresses accept an optional `0x` prefix
/// and booleans are true iff the value spells `true` (case-insensitive) --
/// any other spelling, `1` and `yes` included, is false. Dynamic arrays are
/// comma-separated lists of element values, converted recursively. Every
/// other type is handed to the encoder's own string coercion.
pub fn convert_param(arg: &str, ty: &DynSolType) -> Result<DynSolValue> {
    let value = match ty {
        DynSolType::Uint(size) => {
            let value = U256::from_str_radix(arg, 10)
                .wrap_err_with(|| format!("invalid integer `{arg}` for type `{ty}`"))?;
            DynSolValue::Uint(value, *size)
        }
        DynSolType::Int(size) => {
            let value = I256::from_dec_str(arg)
                .wrap_err_with(|| format!("invalid integer `{arg}` for type `{ty}`"))?;
            DynSolValue::Int(value, *size)
        }
        DynSolType::Address => {
            let value = arg
                .strip_prefix("0x")
                .unwrap_or(arg)
                .parse::<Address>()
                .wrap_err_with(|| format!("invalid address `{arg}`"))?;
            DynSolValue::Address(value)
        }
        DynSolType::Bool => DynSolValue::Bool(arg.eq_ignore_ascii_case("true")),
        DynSolType::Array(inner) => {
            let values = arg
                .split(',')
                .map(|element| convert_param(element.trim(), inner))
                .collect::<Result<Vec<_>>>()?;
            DynSolValue::Array(values)
        }
        ty => ty
            .coerce_str(arg)
            .wrap_err_with(|| format!("could not encode `{arg}` as `{ty}`"))?,
    };
    Ok(value)
}

/// Encodes a function call given its signature and textual arguments,
/// returning the calldata as a `0x`-prefixed lowercase hex string.
pub fn encode_call<S: AsRef<str>>(sig: &str, args: &[S]) -> Result<String> {
    let (name, type_tags) = parse_signature(sig)?;
    eyre::ensure!(
        args.len() == type_tags.len(),
        "expected {} parameters for `{sig}`, got {}",
        type_tags.len(),
        args.len()
    );

    let mut values = Vec::with_capacity(type_tags.len());
    for (tag, arg) in std::iter::zip(&type_tags, args) {
        let ty = DynSolType::parse(tag)
            .wrap_err_with(|| format!("invalid parameter type `{tag}` in `{sig}`"))?;
        values.push(convert_param(arg.as_ref(), &ty)?);
    }
    trace!(name, args = args.len(), "encoding calldata");

    let mut calldata = selector(sig).to_vec();
    calldata.extend_from_slice(&DynSolValue::Tuple(values).abi_encode_params());
    Ok(hex::encode_prefixed(calldata))
}
