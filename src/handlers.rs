use std::collections::HashMap;
use std::io::Read;
use std::sync::{Arc, Mutex};

use iron::prelude::*;
use iron::{status, Handler};
use iron::headers::{ContentType, Location};
use iron::modifiers::Header;
use maud::Markup;
use router::Router;
use rustc_serialize::json;
use rustc_serialize::{Encodable, Encoder};
use urlencoded::{QueryMap, UrlDecodingError, UrlEncodedBody};

use collection::PostCollection;
use error::PostError;
use model::{parse_id, NewPost, PostId};
use views;

/// Match a `Result` into its inner value or
/// return `500 Internal Server Error`,
/// or some other provided error using the second variant of this macro.
macro_rules! try_handler {
    ( $e:expr ) => {
        match $e {
            Ok(x) => x,
            Err(e) => return Ok(Response::with((status::InternalServerError, e.to_string())))
        }
    };
    ( $e:expr, $error:expr ) => {
        match $e {
            Ok(x) => x,
            Err(e) => return Ok(Response::with(($error, e.to_string())))
        }
    }
}

/// Lock the shared collection, or fail the request with
/// `500 Internal Server Error` if another handler panicked while holding it.
macro_rules! lock {
    ( $e:expr ) => {
        match $e.lock() {
            Ok(guard) => guard,
            Err(_) => return Err(PostError::Poisoned.into()),
        }
    }
}

/// Get the value of a parameter in the URI.
/// If the parameter was absent, return `400 Bad Request`.
/// If we could not obtain the parameter list, return `500 Internal Server Error`.
macro_rules! get_http_param {
    ( $r:expr, $e:expr ) => {
        match $r.extensions.get::<Router>() {
            Some(router) => {
                match router.find($e) {
                    Some(val) => val,
                    None => return Ok(Response::with(status::BadRequest)),
                }
            }
            None => return Ok(Response::with(status::InternalServerError)),
        }
    }
}

/// Declare a handler that works on the shared post collection.
macro_rules! posts_handler {
    ( $name:ident ) => {
        pub struct $name {
            posts: Arc<Mutex<PostCollection>>,
        }

        impl $name {
            fn new(posts: Arc<Mutex<PostCollection>>) -> $name {
                $name { posts: posts }
            }
        }
    }
}

const INDEX_PATH: &'static str = "/posts";

pub struct Handlers {
    pub index: IndexHandler,
    pub new_post: NewPostHandler,
    pub create: CreateHandler,
    pub show: ShowHandler,
    pub edit: EditHandler,
    pub update: UpdateHandler,
    pub destroy: DestroyHandler,
    pub api_feed: ApiFeedHandler,
    pub api_post: ApiPostHandler,
    pub api_create: ApiCreateHandler,
}

impl Handlers {
    pub fn new(posts: Arc<Mutex<PostCollection>>) -> Handlers {
        Handlers {
            index: IndexHandler::new(posts.clone()),
            new_post: NewPostHandler,
            create: CreateHandler::new(posts.clone()),
            show: ShowHandler::new(posts.clone()),
            edit: EditHandler::new(posts.clone()),
            update: UpdateHandler::new(posts.clone()),
            destroy: DestroyHandler::new(posts.clone()),
            api_feed: ApiFeedHandler::new(posts.clone()),
            api_post: ApiPostHandler::new(posts.clone()),
            api_create: ApiCreateHandler::new(posts),
        }
    }
}

fn html(page: Markup) -> Response {
    Response::with((status::Ok, Header(ContentType::html()), page.into_string()))
}

fn json_response(code: status::Status, payload: String) -> Response {
    Response::with((code, Header(ContentType::json()), payload))
}

/// Error body for the JSON routes, which never answer with an HTML page.
struct ApiError {
    error: String,
}

// Hand-written equivalent of the former `RustcEncodable` derive.
impl Encodable for ApiError {
    fn encode<S: Encoder>(&self, s: &mut S) -> Result<(), S::Error> {
        s.emit_struct("ApiError", 1, |s| s.emit_struct_field("error", 0, |s| self.error.encode(s)))
    }
}

fn redirect_to_index() -> Response {
    Response::with((status::Found, Header(Location(INDEX_PATH.to_string()))))
}

/// The `:id` segment of the path. Anything that is not a UUID cannot name a
/// post, so it is reported the same way as an unknown id.
fn path_id(req: &Request) -> Result<PostId, PostError> {
    let raw = req.extensions
        .get::<Router>()
        .and_then(|router| router.find("id"))
        .unwrap_or("");
    parse_id(raw).ok_or_else(|| PostError::NotFound(raw.to_string()))
}

/// The url-encoded form body. An empty body, or one sent without a form
/// `Content-Type`, reads as an empty form.
fn form_body(req: &mut Request) -> IronResult<QueryMap> {
    match req.get::<UrlEncodedBody>() {
        Ok(form) => Ok(form),
        Err(UrlDecodingError::EmptyQuery) => Ok(HashMap::new()),
        Err(err) => Err(IronError::new(err, status::BadRequest)),
    }
}

/// Missing fields read as empty text; nothing is validated.
fn form_field(form: &QueryMap, name: &str) -> String {
    form.get(name)
        .and_then(|values| values.first())
        .cloned()
        .unwrap_or_default()
}

posts_handler!(IndexHandler);

impl Handler for IndexHandler {
    fn handle(&self, _: &mut Request) -> IronResult<Response> {
        let posts = lock!(self.posts);
        Ok(html(views::index(posts.list())))
    }
}

pub struct NewPostHandler;

impl Handler for NewPostHandler {
    fn handle(&self, _: &mut Request) -> IronResult<Response> {
        Ok(html(views::new_form()))
    }
}

posts_handler!(CreateHandler);

impl Handler for CreateHandler {
    fn handle(&self, req: &mut Request) -> IronResult<Response> {
        let form = form_body(req)?;
        let username = form_field(&form, "username");
        let content = form_field(&form, "content");

        let post = lock!(self.posts).create(&username, &content);
        info!("created post {} by {:?}", post.id(), post.username());

        Ok(redirect_to_index())
    }
}

posts_handler!(ShowHandler);

impl Handler for ShowHandler {
    fn handle(&self, req: &mut Request) -> IronResult<Response> {
        let id = path_id(req)?;
        let posts = lock!(self.posts);
        let post = posts.find(&id)?;
        Ok(html(views::show(post)))
    }
}

posts_handler!(EditHandler);

impl Handler for EditHandler {
    fn handle(&self, req: &mut Request) -> IronResult<Response> {
        let id = path_id(req)?;
        let posts = lock!(self.posts);
        let post = posts.find(&id)?;
        Ok(html(views::edit_form(post)))
    }
}

posts_handler!(UpdateHandler);

impl Handler for UpdateHandler {
    fn handle(&self, req: &mut Request) -> IronResult<Response> {
        let id = path_id(req)?;
        let form = form_body(req)?;
        let content = form_field(&form, "content");

        lock!(self.posts).update_content(&id, &content)?;
        info!("updated content of post {}", id);

        Ok(redirect_to_index())
    }
}

posts_handler!(DestroyHandler);

impl Handler for DestroyHandler {
    fn handle(&self, req: &mut Request) -> IronResult<Response> {
        match path_id(req) {
            Ok(id) => {
                let removed = lock!(self.posts).delete(&id);
                match removed {
                    Some(post) => info!("deleted post {}", post.id()),
                    None => warn!("delete of unknown post {}", id),
                }
            }
            Err(err) => warn!("delete ignored: {}", err),
        }
        Ok(redirect_to_index())
    }
}

posts_handler!(ApiFeedHandler);

impl Handler for ApiFeedHandler {
    fn handle(&self, _: &mut Request) -> IronResult<Response> {
        let payload = try_handler!(json::encode(&lock!(self.posts).list()));
        Ok(json_response(status::Ok, payload))
    }
}

posts_handler!(ApiPostHandler);

impl Handler for ApiPostHandler {
    fn handle(&self, req: &mut Request) -> IronResult<Response> {
        let id = {
            let post_id = get_http_param!(req, "id");
            try_handler!(PostId::parse_str(post_id), status::BadRequest)
        };

        let posts = lock!(self.posts);
        let payload = match posts.find(&id) {
            Ok(post) => try_handler!(json::encode(post)),
            Err(err) => {
                let body = ApiError { error: err.to_string() };
                return Ok(json_response(status::NotFound, try_handler!(json::encode(&body))));
            }
        };
        Ok(json_response(status::Ok, payload))
    }
}

posts_handler!(ApiCreateHandler);

impl Handler for ApiCreateHandler {
    fn handle(&self, req: &mut Request) -> IronResult<Response> {
        let mut payload = String::new();
        try_handler!(req.body.read_to_string(&mut payload));

        let new_post: NewPost = try_handler!(json::decode(&payload), status::BadRequest);

        let post = lock!(self.posts).create(&new_post.username, &new_post.content);
        info!("created post {} by {:?} via api", post.id(), post.username());

        let created = try_handler!(json::encode(&post));
        Ok(json_response(status::Created, created))
    }
}
