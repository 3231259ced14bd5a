use tracing::info;

use crate::document::MapDocument;
use crate::error::MapError;
use crate::qpack::{self, QpackRecord};

use super::MapIoError;

pub const MAP_SERVER_URL: &str = "http://www.plazmaburst2.com/pb2/server.php";

/// Accept list sent by the game's Flash client; the server expects it.
pub const FLASH_ACCEPT: &str = "text/xml, application/xml, application/xhtml+xml, text/html;q=0.9, \
text/plain;q=0.8, text/css, image/png, image/jpeg, image/gif;q=0.8, application/x-shockwave-flash, \
video/mp4;q=0.9, flv-application/octet-stream;q=0.8, video/x-flv;q=0.7, audio/mp4, \
application/futuresplash, */*;q=0.5";
pub const FLASH_USER_AGENT: &str = "Shockwave Flash";
pub const FLASH_VERSION: &str = "11,7,700,224";

/// Source of qpack-encoded map data, keyed by the server's map id.
pub trait MapFetcher {
    fn fetch(&self, map_id: &str) -> Result<String, MapIoError>;
}

/// Form fields of a map request.
pub(crate) fn request_form(map_id: &str) -> [(&'static str, &str); 5] {
    [
        ("p", "undefined"),
        ("cmap", map_id),
        ("l", "undefined"),
        ("qpack", "1.0"),
        ("rq", "cmap"),
    ]
}

/// Fetches a map and expands its qpack encoding.
pub fn fetch_map_markup(fetcher: &dyn MapFetcher, map_id: &str) -> Result<String, MapIoError> {
    let encoded = fetcher.fetch(map_id)?;
    let decoded = qpack::decode(&encoded);
    info!(
        map_id,
        encoded_bytes = encoded.len(),
        decoded_bytes = decoded.len(),
        "remote_map_fetched"
    );
    Ok(decoded)
}

pub fn fetch_map_records(
    fetcher: &dyn MapFetcher,
    map_id: &str,
) -> Result<Vec<QpackRecord>, MapIoError> {
    let decoded = fetch_map_markup(fetcher, map_id)?;
    Ok(qpack::parse_records(&decoded))
}

pub fn fetch_map_document(fetcher: &dyn MapFetcher, map_id: &str) -> Result<MapDocument, MapError> {
    let decoded = fetch_map_markup(fetcher, map_id)?;
    MapDocument::import(&decoded)
}

#[cfg(feature = "online")]
mod http {
    use std::time::Duration;

    use reqwest::blocking::Client;
    use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

    use super::{
        request_form, MapFetcher, MapIoError, FLASH_ACCEPT, FLASH_USER_AGENT, FLASH_VERSION,
        MAP_SERVER_URL,
    };

    /// Blocking client that talks to the map server the way the Flash game does.
    #[derive(Debug, Clone)]
    pub struct HttpMapFetcher {
        client: Client,
        endpoint: String,
    }

    impl HttpMapFetcher {
        pub fn new() -> Result<Self, MapIoError> {
            Self::with_endpoint(MAP_SERVER_URL)
        }

        pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, MapIoError> {
            let endpoint = endpoint.into();
            let mut headers = HeaderMap::new();
            headers.insert(ACCEPT, HeaderValue::from_static(FLASH_ACCEPT));
            headers.insert(USER_AGENT, HeaderValue::from_static(FLASH_USER_AGENT));
            headers.insert("x-flash-version", HeaderValue::from_static(FLASH_VERSION));
            let client = Client::builder()
                .timeout(Duration::from_secs(30))
                .default_headers(headers)
                .build()
                .map_err(|error| MapIoError::ClientSetup {
                    source: Box::new(error),
                })?;
            Ok(Self { client, endpoint })
        }

        pub fn endpoint(&self) -> &str {
            &self.endpoint
        }
    }

    impl MapFetcher for HttpMapFetcher {
        fn fetch(&self, map_id: &str) -> Result<String, MapIoError> {
            let network = |error: reqwest::Error| MapIoError::Network {
                map_id: map_id.to_string(),
                source: Box::new(error),
            };
            let response = self
                .client
                .post(&self.endpoint)
                .form(&request_form(map_id))
                .send()
                .map_err(network)?;
            let status = response.status();
            if !status.is_success() {
                return Err(MapIoError::HttpStatus {
                    map_id: map_id.to_string(),
                    endpoint: self.endpoint.clone(),
                    status: status.as_u16(),
                });
            }
            response.text().map_err(network)
        }
    }
}

#[cfg(feature = "online")]
pub use http::HttpMapFetcher;

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::MapErrorCode;
    use crate::model::{EntityVariant, Kind, MapBox};

    struct FakeFetcher {
        body: Result<String, String>,
        requested: RefCell<Vec<String>>,
    }

    impl FakeFetcher {
        fn serving(body: &str) -> Self {
            Self {
                body: Ok(body.to_string()),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl MapFetcher for FakeFetcher {
        fn fetch(&self, map_id: &str) -> Result<String, MapIoError> {
            self.requested.borrow_mut().push(map_id.to_string());
            self.body.clone().map_err(|message| MapIoError::Network {
                map_id: map_id.to_string(),
                source: message.into(),
            })
        }
    }

    const PACKED_BOX: &str = "<box x=\"10^Q20^R300^S20^T0\" />";

    #[test]
    fn request_form_matches_flash_client() {
        let form = request_form("pb2_map");
        assert_eq!(form[1], ("cmap", "pb2_map"));
        assert_eq!(form[3], ("qpack", "1.0"));
        assert_eq!(form[4], ("rq", "cmap"));
    }

    #[test]
    fn markup_is_decoded_before_returning() {
        let fetcher = FakeFetcher::serving(PACKED_BOX);
        let markup = fetch_map_markup(&fetcher, "demo").expect("markup");
        assert_eq!(markup, r#"<box x="10" y="20" w="300" h="20" m="0" />"#);
        assert_eq!(*fetcher.requested.borrow(), vec!["demo".to_string()]);
    }

    #[test]
    fn records_and_document_views_share_the_fetch() {
        let fetcher = FakeFetcher::serving(PACKED_BOX);
        let records = fetch_map_records(&fetcher, "demo").expect("records");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, "box");

        let document = fetch_map_document(&fetcher, "demo").expect("document");
        assert_eq!(document.count(Kind::Box), 1);
        let wall = MapBox::downcast(&document.entities(Kind::Box)[0]).expect("box");
        assert_eq!(wall.w, 300);
    }

    #[test]
    fn transport_failures_surface_as_io_errors() {
        let fetcher = FakeFetcher {
            body: Err("connection refused".to_string()),
            requested: RefCell::new(Vec::new()),
        };
        let err = fetch_map_document(&fetcher, "demo").expect_err("fetch");
        assert_eq!(err.code(), MapErrorCode::Io);
        assert!(err.to_string().contains("connection refused"), "{err}");

        let MapError::Io(io_error) = &err else {
            panic!("unexpected error {err:?}");
        };
        let cause = std::error::Error::source(io_error).expect("chained cause");
        assert_eq!(cause.to_string(), "connection refused");
    }
}
