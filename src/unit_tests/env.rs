use std::any::{type_name, Any};
use std::collections::HashMap;
use std::ops::Fn;
use std::sync::{LockResult, Mutex, MutexGuard, RwLock};

use futures::{future, Future, FutureExt, TryFutureExt};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::runtime::{ConditionalSend, Env, EnvFutureExt, TryEnvFuture};

lazy_static! {
    pub static ref FETCH_HANDLER: RwLock<FetchHandler> =
        RwLock::new(Box::new(default_fetch_handler));
    pub static ref REQUESTS: RwLock<Vec<Request>> = Default::default();
    static ref ENV_MUTEX: Mutex<()> = Default::default();
}

pub type FetchHandler =
    Box<dyn Fn(Request) -> TryEnvFuture<Box<dyn Any + Send>> + Send + Sync + 'static>;

#[derive(Default, Debug, Clone, PartialEq)]
pub struct Request {
    pub url: String,
    pub method: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl<T: Serialize> From<http::Request<T>> for Request {
    fn from(request: http::Request<T>) -> Self {
        let (head, body) = request.into_parts();
        Request {
            url: head.uri.to_string(),
            method: head.method.as_str().to_owned(),
            headers: head
                .headers
                .iter()
                .map(|(key, value)| (key.as_str().to_owned(), value.to_str().unwrap().to_owned()))
                .collect::<HashMap<_, _>>(),
            body: serde_json::to_string(&body).unwrap(),
        }
    }
}

#[derive(Debug)]
pub enum TestEnv {}

impl TestEnv {
    pub fn reset() -> LockResult<MutexGuard<'static, ()>> {
        let env_mutex = ENV_MUTEX.lock();
        *FETCH_HANDLER.write().unwrap() = Box::new(default_fetch_handler);
        REQUESTS.write().unwrap().clear();
        env_mutex
    }
    pub fn run<F: FnOnce()>(runnable: F) {
        futures::executor::block_on(future::lazy(|_| runnable()))
    }
}

impl Env for TestEnv {
    fn fetch<
        IN: Serialize + ConditionalSend + 'static,
        OUT: for<'de> Deserialize<'de> + ConditionalSend + 'static,
    >(
        request: http::Request<IN>,
    ) -> TryEnvFuture<OUT> {
        let request = Request::from(request);
        REQUESTS.write().unwrap().push(request.to_owned());
        FETCH_HANDLER.read().unwrap()(request)
            .map_ok(|resp| {
                *resp
                    .downcast::<OUT>()
                    .unwrap_or_else(|_| panic!("Failed to downcast to {}", type_name::<OUT>()))
            })
            .boxed_env()
    }
    fn exec_concurrent<F: Future<Output = ()> + ConditionalSend + 'static>(future: F) {
        // test fetch handlers resolve immediately
        future
            .now_or_never()
            .expect("concurrent effect did not resolve");
    }
    fn exec_sequential<F: Future<Output = ()> + ConditionalSend + 'static>(future: F) {
        future
            .now_or_never()
            .expect("sequential effect did not resolve");
    }
    #[cfg(debug_assertions)]
    fn log(message: String) {
        println!("{message}")
    }
}

pub fn default_fetch_handler(request: Request) -> TryEnvFuture<Box<dyn Any + Send>> {
    panic!("Unhandled fetch request: {:#?}", request)
}
