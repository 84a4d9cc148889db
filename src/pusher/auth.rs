use crate::core::errors::PusherError;
use crate::core::kernel::signer::Signer;
use crate::core::types::SocketAuth;
use serde_json::Value;

/// Sign a socket's subscription to a channel
///
/// The signed string is `socket_id:channel`, extended with `:channel_data`
/// when presence data is supplied. The same JSON text is returned as
/// `channel_data` so the socket can forward it verbatim.
pub fn socket_signature<S: Signer + ?Sized>(
    signer: &S,
    channel: &str,
    socket_id: &str,
    data: Option<&Value>,
) -> Result<SocketAuth, PusherError> {
    let mut parts = vec![socket_id.to_string(), channel.to_string()];

    let channel_data = data.map(serde_json::to_string).transpose()?;
    if let Some(serialized) = &channel_data {
        parts.push(serialized.clone());
    }

    let signature = signer.sign(&parts.join(":"))?;

    Ok(SocketAuth {
        auth: format!("{}:{}", signer.key(), signature),
        channel_data,
    })
}
