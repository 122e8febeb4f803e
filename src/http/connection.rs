use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::handler::auth::CredentialChecker;
use crate::handler::resolver::ResourceResolver;
use crate::handler::router::RequestHandler;
use crate::http::parser::{ParseError, parse_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

const READ_BUF_CAP: usize = 4096;

pub struct Connection<R, C> {
    stream: TcpStream,
    buffer: BytesMut,
    state: ConnectionState,
    handler: Arc<RequestHandler<R, C>>,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

enum ReadOutcome {
    Complete(Request),
    Malformed(ParseError),
    Disconnected,
}

impl<R, C> Connection<R, C>
where
    R: ResourceResolver,
    C: CredentialChecker,
{
    pub fn new(stream: TcpStream, handler: Arc<RequestHandler<R, C>>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(READ_BUF_CAP),
            state: ConnectionState::Reading,
            handler,
        }
    }

    /// Drives the connection through Reading → Processing → Writing →
    /// Closed. One request per connection; after the response is written
    /// the connection always closes.
    ///
    /// A malformed request is answered with a 400 response on the same
    /// connection, never dropped. A failure here is fatal for this request
    /// only, not for the server.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => match self.read_request().await? {
                    ReadOutcome::Complete(req) => {
                        self.state = ConnectionState::Processing(req);
                    }
                    ReadOutcome::Malformed(e) => {
                        tracing::warn!(error = ?e, "Malformed request");
                        let writer = ResponseWriter::new(&Response::bad_request());
                        self.state = ConnectionState::Writing(writer);
                    }
                    ReadOutcome::Disconnected => {
                        self.state = ConnectionState::Closed;
                    }
                },

                ConnectionState::Processing(req) => {
                    let response = self.handler.handle(req).await;
                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    async fn read_request(&mut self) -> anyhow::Result<ReadOutcome> {
        loop {
            // Try parsing whatever we already have
            match parse_request(&self.buffer) {
                Ok((request, consumed)) => {
                    let _ = self.buffer.split_to(consumed);
                    return Ok(ReadOutcome::Complete(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data, fall through to read
                }

                Err(e) => return Ok(ReadOutcome::Malformed(e)),
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                // Client closed before sending a complete request
                return Ok(ReadOutcome::Disconnected);
            }
        }
    }
}
