use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use axum::{
    extract::{ConnectInfo, Request},
    middleware::{from_fn, Next},
    Router,
};
use tracing::{debug, error, warn};

use crate::RestServerRealIpConfig;

pub fn add<S: Clone + Send + Sync + 'static>(
    real_ip_config: Option<Arc<RestServerRealIpConfig>>,
) -> impl FnOnce(Router<S>) -> Router<S> {
    |router| {
        router.layer(from_fn(move |mut request: Request, next: Next| {
            if let Some(client_ip) = ClientIp::from_request(&request, real_ip_config.as_deref()) {
                request.extensions_mut().insert(client_ip);
            }
            next.run(request)
        }))
    }
}

/// Address of the visitor, resolved through a trusted proxy if configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientIp(pub IpAddr);

impl ClientIp {
    fn from_request(
        request: &Request,
        real_ip_config: Option<&RestServerRealIpConfig>,
    ) -> Option<Self> {
        let peer_ip = request.extensions().get::<ConnectInfo<SocketAddr>>()?.ip();

        let Some(RestServerRealIpConfig { header, set_from }) = real_ip_config else {
            return Some(Self(peer_ip));
        };

        let header_value = request.headers().get(header);

        if *set_from != peer_ip {
            if let Some(header_value) = header_value {
                debug!(%peer_ip, ?header_value, "ignoring real ip header from untrusted peer");
            }
            return Some(Self(peer_ip));
        }

        let Some(header_value) = header_value else {
            warn!(%peer_ip, "real ip header missing");
            return Some(Self(peer_ip));
        };

        match header_value
            .to_str()
            .ok()
            .and_then(|value| value.trim().parse().ok())
        {
            Some(real_ip) => Some(Self(real_ip)),
            None => {
                error!(%peer_ip, ?header_value, "failed to parse real ip header");
                Some(Self(peer_ip))
            }
        }
    }
}
