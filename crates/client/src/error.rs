// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::gateway::GatewayError;
use comanda_api::ApiError;

/// Errors surfaced by the client flows.
///
/// Validation failures arrive as [`ApiError`] before any network I/O;
/// transport failures arrive as [`GatewayError`] and never imply loss of
/// local state.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A local validation or contract error; nothing was sent.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The network call failed or the server rejected the request.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
