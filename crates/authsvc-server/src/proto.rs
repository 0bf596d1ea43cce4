//! Generated gRPC types for the `auth` package

#![allow(clippy::pedantic)]
#![allow(missing_docs)]

tonic::include_proto!("auth");
