use error::PostError;
use model::{Post, PostId};

const SEED_POSTS: [(&'static str, &'static str); 3] = [("apnacollege", "I love coding!"),
                                                        ("Ashok Paudel", "Hardwork is important"),
                                                        ("Bhawana Pokhrel", "What do I say?")];

/// In-memory, insertion-ordered store of every post the server knows about.
///
/// The collection itself does no locking; the serving process wraps it in a
/// `Mutex` and holds the lock for exactly one operation per request.
#[derive(Clone, Debug, Default)]
pub struct PostCollection {
    posts: Vec<Post>,
}

impl PostCollection {
    pub fn new() -> PostCollection {
        PostCollection { posts: vec![] }
    }

    /// A collection holding the three posts the server starts with.
    pub fn seeded() -> PostCollection {
        let mut collection = PostCollection::new();
        for &(username, content) in SEED_POSTS.iter() {
            collection.create(username, content);
        }
        collection
    }

    pub fn list(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn create(&mut self, username: &str, content: &str) -> Post {
        let post = Post::new(username, content);
        self.posts.push(post.clone());
        post
    }

    pub fn find(&self, id: &PostId) -> Result<&Post, PostError> {
        self.posts
            .iter()
            .find(|post| post.id() == id)
            .ok_or_else(|| PostError::NotFound(id.to_string()))
    }

    /// Replace the content of a post. Its id and username are never touched.
    pub fn update_content(&mut self, id: &PostId, content: &str) -> Result<&Post, PostError> {
        match self.posts.iter_mut().find(|post| post.id() == id) {
            Some(post) => {
                post.set_content(content);
                Ok(&*post)
            }
            None => Err(PostError::NotFound(id.to_string())),
        }
    }

    /// Remove the post with the given id. An unknown id is not an error and
    /// leaves the collection as it was.
    pub fn delete(&mut self, id: &PostId) -> Option<Post> {
        self.posts
            .iter()
            .position(|post| post.id() == id)
            .map(|index| self.posts.remove(index))
    }
}
