extern crate iron;
extern crate router;
extern crate logger;
#[macro_use]
extern crate log;
extern crate env_logger;
extern crate rustc_serialize;
extern crate urlencoded;
#[macro_use]
extern crate maud;
extern crate uuid;

#[cfg(test)]
extern crate iron_test;

mod model;
mod error;
mod collection;
mod views;
mod middleware;
mod handlers;
mod routes;
mod config;

use std::process;
use std::sync::{Arc, Mutex};

use iron::Iron;

use collection::PostCollection;
use config::Config;
use handlers::Handlers;

// RUST_LOG=info,logger=info posts_backend > logs 2>&1 &
fn main() {
    if let Err(err) = env_logger::init() {
        eprintln!("could not initialise logging: {}", err);
    }

    let config = Config::from_env();
    let posts = PostCollection::seeded();
    info!("starting with {} seeded posts", posts.len());
    let posts = Arc::new(Mutex::new(posts));
    let chain = routes::chain(Handlers::new(posts));

    match Iron::new(chain).http(config.addr.as_str()) {
        Ok(_listening) => info!("listening on {}", config.addr),
        Err(err) => {
            error!("could not bind {}: {}", config.addr, err);
            process::exit(1);
        }
    }
}
