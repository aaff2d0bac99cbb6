use crate::app::AppState;
use crate::errors::Error;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use bytes::BytesMut;
use derive_deref::Deref;
use futures::future::Future;
use futures::stream::Stream;
use serde::de::DeserializeOwned;
use std::default::Default;

/// Json extractor
#[derive(Debug, Deref, Clone)]
pub struct SimpleJson<T>(pub T);

impl<T> SimpleJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

pub struct SimpleJsonConfig;

impl Default for SimpleJsonConfig {
    fn default() -> Self {
        SimpleJsonConfig {}
    }
}

// 8m: enough for a base64-encoded logo next to the request fields
const MAX_SIZE: usize = 8 * 1024 * 1024;

impl<T> FromRequest<AppState> for SimpleJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Config = SimpleJsonConfig;
    type Result = Result<Box<dyn Future<Item = Self, Error = Error>>, Error>;

    fn from_request(req: &HttpRequest<AppState>, _cfg: &Self::Config) -> Self::Result {
        Ok(Box::new(
            req.payload()
                .map_err(|e| Error::Internal(format!("Payload error: {:?}", e)))
                .fold(BytesMut::new(), move |mut body, chunk| {
                    if (body.len() + chunk.len()) > MAX_SIZE {
                        Err(Error::Internal("overflow".to_owned()))
                    } else {
                        body.extend_from_slice(&chunk);
                        Ok(body)
                    }
                })
                .and_then(|body| {
                    let obj = serde_json::from_slice::<T>(&body)?;
                    Ok(SimpleJson(obj))
                }),
        ))
    }
}
