/// All errors the reducer can raise.
///
/// An undecidable subtype or equality query is not an error -- the node
/// is left unevaluated for downstream consumers. An error here always
/// means an earlier pass produced a malformed tree; the whole reduction
/// aborts and the upstream builder must be fixed.
#[derive(Debug, thiserror::Error)]
pub enum ReduceError {
    /// The left operand of an `Is` or `Equal` node reduced to a node
    /// that is neither a constant nor a variable.
    #[error("operand of '{context}' reduced to {kind}, expected a constant or variable")]
    MalformedOperand {
        context: &'static str,
        kind: &'static str,
    },
}
