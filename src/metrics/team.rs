use super::grades::TeamRating;
use super::tasks::completion_rate;
use super::total_hours;
use crate::domain::{TaskStatus, User};
use crate::seed;
use crate::store::AppState;

#[derive(Debug, Clone, PartialEq)]
pub struct MemberStats {
    pub member: User,
    pub total: usize,
    pub done: usize,
    pub open: usize,
    pub hours: f64,
    pub completion_rate: f64,
    pub rating: TeamRating,
}

/// Per-member figures for everyone on the roster except `viewer`
pub fn member_stats(state: &AppState, viewer: &User) -> Vec<MemberStats> {
    seed::demo_users()
        .into_iter()
        .filter(|member| member.id != viewer.id)
        .map(|member| {
            let assigned: Vec<TaskStatus> = state
                .tasks
                .iter()
                .filter(|task| task.assignee_id == member.id)
                .map(|task| task.status)
                .collect();
            let done = assigned.iter().filter(|s| s.is_done()).count();
            let open = assigned.iter().filter(|s| s.is_open()).count();
            let hours = total_hours(
                state
                    .time_logs
                    .iter()
                    .filter(|log| log.user_id == member.id),
            );
            let rate = completion_rate(done, assigned.len());
            MemberStats {
                member,
                total: assigned.len(),
                done,
                open,
                hours,
                completion_rate: rate,
                rating: TeamRating::from_rate(rate),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamOverview {
    pub members: usize,
    pub in_progress: usize,
    pub done: usize,
    pub hours: f64,
}

pub fn team_overview(state: &AppState, viewer: &User) -> TeamOverview {
    TeamOverview {
        members: seed::demo_users()
            .iter()
            .filter(|member| member.id != viewer.id)
            .count(),
        in_progress: state
            .tasks
            .iter()
            .filter(|task| task.status == TaskStatus::InProgress)
            .count(),
        done: state.tasks.iter().filter(|task| task.status.is_done()).count(),
        hours: total_hours(&state.time_logs),
    }
}
