use iron::prelude::*;
use iron::{AfterMiddleware, BeforeMiddleware};
use iron::headers::ContentType;
use iron::method::Method;
use urlencoded::UrlEncodedQuery;

const OVERRIDE_PARAM: &'static str = "_method";

/// Let HTML forms reach PATCH/PUT/DELETE routes.
///
/// A `POST` whose query string carries `_method=<verb>` is dispatched as that
/// verb. Any other method, or an unknown verb, passes through untouched.
pub struct MethodOverride;

impl BeforeMiddleware for MethodOverride {
    fn before(&self, req: &mut Request) -> IronResult<()> {
        if req.method != Method::Post {
            return Ok(());
        }

        let requested = match req.get_ref::<UrlEncodedQuery>() {
            Ok(query) => {
                query.get(OVERRIDE_PARAM)
                    .and_then(|values| values.first())
                    .map(|verb| verb.to_uppercase())
            }
            Err(_) => None,
        };

        let method = match requested.as_ref().map(|verb| verb.as_str()) {
            Some("PATCH") => Method::Patch,
            Some("PUT") => Method::Put,
            Some("DELETE") => Method::Delete,
            Some(other) => {
                warn!("ignoring unsupported method override {:?}", other);
                return Ok(());
            }
            None => return Ok(()),
        };

        debug!("overriding POST {} as {}", req.url, method);
        req.method = method;
        Ok(())
    }
}

/// Anything a handler did not label explicitly is one of our HTML pages.
pub struct DefaultContentType;

impl AfterMiddleware for DefaultContentType {
    fn after(&self, _: &mut Request, mut res: Response) -> IronResult<Response> {
        if !res.headers.has::<ContentType>() {
            res.headers.set(ContentType::html());
        }
        Ok(res)
    }
}
