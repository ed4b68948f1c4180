//! Mapping of alloy failures onto the application error.

use alloy_provider::PendingTransactionError;

use crate::error::Error;

/// JSON-RPC error code for a request the account holder refused.
const USER_REJECTED_CODE: i64 = 4001;

/// Classify a contract call failure.
///
/// A JSON-RPC error response means the node evaluated the call and refused
/// it; any other transport failure never reached the contract.
pub(super) fn classify(err: alloy_contract::Error) -> Error {
    match &err {
        alloy_contract::Error::TransportError(rpc) => match rpc.as_error_resp() {
            Some(payload) if payload.code == USER_REJECTED_CODE => Error::UserRejected,
            Some(payload) => Error::ContractRevert(payload.message.to_string()),
            None => Error::Network(err.to_string()),
        },
        _ => Error::ContractRevert(err.to_string()),
    }
}

/// Classify a failure while waiting for a receipt.
pub(super) fn receipt_error(err: PendingTransactionError) -> Error {
    Error::Network(format!("failed to get receipt: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_json_rpc::{ErrorPayload, RpcError};

    fn error_response(code: i64, message: &'static str) -> alloy_contract::Error {
        let payload = ErrorPayload {
            code,
            message: message.into(),
            data: None,
        };
        alloy_contract::Error::TransportError(RpcError::ErrorResp(payload))
    }

    #[test]
    fn rejected_request_is_user_rejection() {
        let err = classify(error_response(4001, "User denied transaction signature"));
        assert!(matches!(err, Error::UserRejected));
    }

    #[test]
    fn error_response_is_revert_with_node_message() {
        let err = classify(error_response(3, "execution reverted: insufficient liquidity"));
        match err {
            Error::ContractRevert(message) => assert!(message.contains("insufficient liquidity")),
            other => panic!("expected ContractRevert, got {other:?}"),
        }
    }

    #[test]
    fn missing_response_is_network() {
        let err = classify(alloy_contract::Error::TransportError(RpcError::NullResp));
        assert!(matches!(err, Error::Network(_)));
    }
}
