//! WebSocket client session management.

use futures_util::{SinkExt, StreamExt, stream::SplitSink};
use roomcast_server::infrastructure::dto::websocket::{ClientEvent, ServerEvent};
use tokio::{net::TcpStream, sync::mpsc};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async, tungstenite::protocol::Message,
};

use crate::{command::Command, error::ClientError};

use super::{formatter::MessageFormatter, ui::redisplay_prompt};

type WsSink = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, Message>;

/// Run one WebSocket session.
///
/// Joins `current_room` right after connecting, so a reconnect lands back in
/// the room the user was in. Returns `Ok(())` when the user quits or stdin
/// closes, and an error when the connection fails or is lost.
pub async fn run_client_session(
    url: &str,
    current_room: &mut Option<String>,
    input_rx: &mut mpsc::UnboundedReceiver<String>,
) -> Result<(), ClientError> {
    let (ws_stream, _response) = connect_async(url).await?;

    tracing::info!("Connected to chat server!");
    println!(
        "\nType messages and press Enter to send. Commands: /join <room>, /leave [room], /clear, /quit\n"
    );

    let (mut write, mut read) = ws_stream.split();

    if let Some(room_id) = current_room.clone() {
        send_event(&mut write, &ClientEvent::Join(room_id)).await?;
    }

    // Assigned by the server; learned from the first `joined`.
    let mut me: Option<String> = None;

    loop {
        tokio::select! {
            frame = read.next() => match frame {
                Some(Ok(Message::Text(text))) => {
                    let output = match serde_json::from_str::<ServerEvent>(text.as_str()) {
                        Ok(event) => {
                            if let ServerEvent::Joined(payload) = &event {
                                me = Some(payload.user_id.clone());
                            }
                            MessageFormatter::format_event(&event, me.as_deref())
                        }
                        Err(e) => {
                            tracing::debug!("Unrecognized frame: {}", e);
                            MessageFormatter::format_raw_message(text.as_str())
                        }
                    };
                    print!("{}", output);
                    redisplay_prompt();
                }
                Some(Ok(Message::Binary(data))) => {
                    print!("{}", MessageFormatter::format_binary_message(data.len()));
                    redisplay_prompt();
                }
                Some(Ok(Message::Close(_))) | None => {
                    tracing::info!("Server closed the connection");
                    return Err(ClientError::ConnectionLost);
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    return Err(ClientError::ConnectionLost);
                }
            },
            line = input_rx.recv() => {
                // Input thread gone: Ctrl+C or Ctrl+D
                let Some(line) = line else {
                    write.close().await.ok();
                    return Ok(());
                };

                let command = match Command::parse(&line) {
                    Ok(Command::Quit) => {
                        write.close().await.ok();
                        return Ok(());
                    }
                    Ok(command) => command,
                    Err(e) => {
                        println!("{}", e);
                        redisplay_prompt();
                        continue;
                    }
                };

                match command.into_event(current_room) {
                    Ok(Some(event)) => send_event(&mut write, &event).await?,
                    Ok(None) => {}
                    Err(e) => {
                        println!("{}", e);
                        redisplay_prompt();
                    }
                }
            }
        }
    }
}

async fn send_event(write: &mut WsSink, event: &ClientEvent) -> Result<(), ClientError> {
    let json = serde_json::to_string(event)?;
    if let Err(e) = write.send(Message::Text(json.into())).await {
        tracing::warn!("Failed to send event: {}", e);
        return Err(ClientError::ConnectionLost);
    }
    Ok(())
}
