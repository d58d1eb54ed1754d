use iron::prelude::Chain;
use logger::Logger;
use router::Router;

use handlers::Handlers;
use middleware::{DefaultContentType, MethodOverride};

/// Wire every route into a `Chain` ready to be served.
pub fn chain(handlers: Handlers) -> Chain {
    let (logger_before, logger_after) = Logger::new(None);

    let mut router = Router::new();
    router.get("/posts", handlers.index, "index");
    router.get("/posts/new", handlers.new_post, "new");
    router.post("/posts", handlers.create, "create");
    router.get("/posts/:id", handlers.show, "show");
    router.get("/posts/:id/edit", handlers.edit, "edit");
    router.patch("/posts/:id", handlers.update, "update");
    router.delete("/posts/:id", handlers.destroy, "destroy");

    router.get("/api/posts", handlers.api_feed, "api_feed");
    router.post("/api/posts", handlers.api_create, "api_create");
    router.get("/api/posts/:id", handlers.api_post, "api_post");

    let mut chain = Chain::new(router);
    chain.link_before(logger_before); // Should be first!
    chain.link_before(MethodOverride);
    chain.link_after(DefaultContentType);
    chain.link_after(logger_after); // Should be last!
    chain
}
