use rustc_serialize::{Decodable, Decoder, Encodable, Encoder};
use uuid::Uuid;

/// Posts are keyed by a random v4 UUID that never changes after creation.
pub type PostId = Uuid;

#[derive(Clone, Debug, PartialEq)]
pub struct Post {
    id: PostId,
    username: String,
    content: String,
}

impl Post {
    pub fn new(username: &str, content: &str) -> Post {
        Post {
            id: Uuid::new_v4(),
            username: username.to_string(),
            content: content.to_string(),
        }
    }

    pub fn id(&self) -> &PostId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
    }
}

/// Body of `POST /api/posts`. The id is always assigned by the server.
#[derive(Debug)]
pub struct NewPost {
    pub username: String,
    pub content: String,
}

// Hand-written equivalents of the former `RustcEncodable`/`RustcDecodable`
// derives, which current compilers no longer provide.
impl Encodable for Post {
    fn encode<S: Encoder>(&self, s: &mut S) -> Result<(), S::Error> {
        s.emit_struct("Post", 3, |s| {
            s.emit_struct_field("id", 0, |s| self.id.encode(s))?;
            s.emit_struct_field("username", 1, |s| self.username.encode(s))?;
            s.emit_struct_field("content", 2, |s| self.content.encode(s))
        })
    }
}

impl Decodable for Post {
    fn decode<D: Decoder>(d: &mut D) -> Result<Post, D::Error> {
        d.read_struct("Post", 3, |d| {
            Ok(Post {
                id: d.read_struct_field("id", 0, Decodable::decode)?,
                username: d.read_struct_field("username", 1, Decodable::decode)?,
                content: d.read_struct_field("content", 2, Decodable::decode)?,
            })
        })
    }
}

impl Decodable for NewPost {
    fn decode<D: Decoder>(d: &mut D) -> Result<NewPost, D::Error> {
        d.read_struct("NewPost", 2, |d| {
            Ok(NewPost {
                username: d.read_struct_field("username", 0, Decodable::decode)?,
                content: d.read_struct_field("content", 1, Decodable::decode)?,
            })
        })
    }
}

/// Parse an id taken from a request path.
pub fn parse_id(raw: &str) -> Option<PostId> {
    Uuid::parse_str(raw).ok()
}
