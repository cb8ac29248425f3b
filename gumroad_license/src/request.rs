use http_body_util::Full;
use hyper::{
    body::Bytes,
    header::{HeaderName, HeaderValue, ACCEPT, CONTENT_LENGTH, CONTENT_TYPE},
    HeaderMap, Method, Request as HyperRequest,
};
use serde::Serialize;

/// Form body of `POST /v2/licenses/verify`.
///
/// Gumroad increments the uses count unless told otherwise, so the flag is
/// only written out when it is `false`.
#[derive(Debug, Serialize)]
pub struct VerifyRequest<'a> {
    pub product_id: &'a str,
    pub license_key: &'a str,
    #[serde(skip_serializing_if = "is_true")]
    pub increment_uses_count: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_true(value: &bool) -> bool {
    *value
}

impl VerifyRequest<'_> {
    pub fn to_form(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(self)
    }
}

#[derive(Clone, Default)]
pub struct Request {
    uri: Option<String>,
    method: Option<Method>,
    headers: HeaderMap,
    body: Option<Full<Bytes>>,
}

impl Request {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<HeaderName>, value: impl Into<HeaderValue>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets a url-encoded form as the body along with its content headers.
    #[must_use]
    pub fn form(self, form: String) -> Self {
        let len = form.len();
        let mut this = self
            .header(
                CONTENT_TYPE,
                HeaderValue::from_static("application/x-www-form-urlencoded"),
            )
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(CONTENT_LENGTH, HeaderValue::from(len));
        this.body = Some(Full::from(Bytes::from(form)));
        this
    }

    pub fn build(self) -> Result<HyperRequest<Full<Bytes>>, hyper::http::Error> {
        let mut builder = HyperRequest::builder().uri(self.uri.unwrap_or_default());
        if let Some(method) = self.method {
            builder = builder.method(method);
        }
        if let Some(headers) = builder.headers_mut() {
            headers.extend(self.headers);
        }
        builder.body(self.body.unwrap_or_default())
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn increment_is_omitted_by_default() {
        let form = VerifyRequest {
            product_id: "prod",
            license_key: "KEY-1",
            increment_uses_count: true,
        }
        .to_form()
        .unwrap();
        assert_eq!(form, "product_id=prod&license_key=KEY-1");
    }

    #[test]
    fn increment_false_is_sent() {
        let form = VerifyRequest {
            product_id: "prod",
            license_key: "KEY-1",
            increment_uses_count: false,
        }
        .to_form()
        .unwrap();
        assert_eq!(
            form,
            "product_id=prod&license_key=KEY-1&increment_uses_count=false"
        );
    }

    #[test]
    fn values_are_form_encoded() {
        let form = VerifyRequest {
            product_id: "SDGgCnivv6gTTHfVRfUBxQ==",
            license_key: "a b&c",
            increment_uses_count: true,
        }
        .to_form()
        .unwrap();
        assert_eq!(
            form,
            "product_id=SDGgCnivv6gTTHfVRfUBxQ%3D%3D&license_key=a+b%26c"
        );
    }

    #[tokio::test]
    async fn build_sets_form_headers() {
        let request = Request::new()
            .uri("https://api.gumroad.com/v2/licenses/verify")
            .method(Method::POST)
            .form("product_id=p&license_key=k".into());
        assert_eq!(request.headers().get(CONTENT_LENGTH).unwrap(), "26");

        let request = request.build().unwrap();
        assert_eq!(request.method(), Method::POST);
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded"
        );
        let body = request.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"product_id=p&license_key=k");
    }
}
