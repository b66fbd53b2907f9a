mod client;
mod logger;
