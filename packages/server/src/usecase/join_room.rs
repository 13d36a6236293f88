//! UseCase: ルーム参加処理 (Join)
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RoomCoordinator::join()
//! - 参加者本人への joined（履歴スナップショット）と他メンバーへの system(join)
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規参加、既存メッセージがあるルームへの参加
//! - エッジケース：同じルームへの二重参加（冪等性）

use crate::domain::{Connection, Message, PresenceKind, RoomEvent, RoomId};

use super::coordinator::RoomCoordinator;

/// ルーム参加の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOutcome {
    /// 参加確定時点の履歴スナップショット
    pub history: Vec<Message>,
    /// 既にメンバーだった場合は `false`
    pub newly_joined: bool,
}

impl RoomCoordinator {
    /// ルーム参加を実行
    ///
    /// 参加者本人には履歴付きの joined を、他のメンバーには system(join) を送る。
    /// 既にメンバーの場合は joined の再送のみ行う。
    ///
    /// # Arguments
    ///
    /// * `connection` - 参加する接続（Domain Model）
    /// * `room_id` - 参加先のルーム ID（存在しなければ作成される）
    ///
    /// # Returns
    ///
    /// 履歴スナップショットと新規参加かどうか
    pub async fn join(&self, connection: &mut Connection, room_id: RoomId) -> JoinOutcome {
        let member = connection.as_member();
        let mut entry = self.registry.get(&room_id).await;

        let newly_joined = entry.add_member(member.clone());
        let history = entry.room().log().to_vec();

        self.push_to(
            &member.id,
            &RoomEvent::Joined {
                room_id: room_id.clone(),
                member: member.clone(),
                history: history.clone(),
            },
        )
        .await;

        if newly_joined {
            let others = entry.room().member_ids_except(&member.id);
            self.broadcast(
                &others,
                &RoomEvent::Presence {
                    kind: PresenceKind::Join,
                    room_id: room_id.clone(),
                    member,
                },
            )
            .await;
            tracing::info!(
                "Connection '{}' joined room '{}' ({} other member(s))",
                connection.id,
                room_id,
                others.len()
            );
        } else {
            tracing::debug!(
                "Connection '{}' re-joined room '{}', resent history",
                connection.id,
                room_id
            );
        }
        drop(entry);

        connection.joined(room_id);

        JoinOutcome {
            history,
            newly_joined,
        }
    }
}
