//! Seed datasets for the four verticals.
//!
//! Everything here is in-memory demonstration data. The console never
//! mutates these; the studio takes a working copy of the agent list so
//! pause/resume toggles stay session-local.

use crate::entities::{
    AgentDefinition, ChannelStat, DecisionTrace, IndustryProfile, OperationalRecord, Percent,
    TimelineEvent,
};
use crate::enums::{
    AgentRunStatus, Channel, DeliveryStatus, EventDirection, Industry, Modality, Period,
    RecordStatus,
};
use chrono::NaiveDate;
use once_cell::sync::Lazy;

/// Everything the console needs for one vertical.
#[derive(Debug, Clone)]
pub struct IndustryDataset {
    pub profile: IndustryProfile,
    pub records: Vec<OperationalRecord>,
    pub channel_stats: Vec<ChannelStat>,
    pub agents: Vec<AgentDefinition>,
}

/// Look up the static dataset for an industry.
pub fn dataset(industry: Industry) -> &'static IndustryDataset {
    match industry {
        Industry::Clinic => &CLINIC,
        Industry::Hotel => &HOTEL,
        Industry::Sales => &SALES,
        Industry::Insurance => &INSURANCE,
    }
}

/// Look up only the presentation profile.
pub fn profile(industry: Industry) -> &'static IndustryProfile {
    &dataset(industry).profile
}

// ============================================================================
// BUILDER HELPERS
// ============================================================================

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    // Seed dates are literal and always valid.
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

#[allow(clippy::too_many_arguments)]
fn record(
    record_id: &str,
    contact_name: &str,
    phone: &str,
    slot: &str,
    date: NaiveDate,
    status: RecordStatus,
    risk: u8,
    timeline: Vec<TimelineEvent>,
    notes: &[&str],
) -> OperationalRecord {
    OperationalRecord {
        record_id: record_id.to_string(),
        contact_name: contact_name.to_string(),
        phone: phone.to_string(),
        slot: slot.to_string(),
        date,
        status,
        risk_score: Percent::new_const(risk),
        timeline,
        notes: notes.iter().map(|n| n.to_string()).collect(),
    }
}

fn event(
    at: &str,
    action: &str,
    direction: EventDirection,
    delivery: DeliveryStatus,
    message: &str,
) -> TimelineEvent {
    TimelineEvent {
        at: at.to_string(),
        action: action.to_string(),
        direction,
        delivery,
        message: message.to_string(),
        decision: None,
    }
}

fn decided(mut ev: TimelineEvent, reason: &str, confidence: u8, agent: &str) -> TimelineEvent {
    ev.decision = Some(DecisionTrace {
        reason: reason.to_string(),
        confidence: Percent::new_const(confidence),
        agent: agent.to_string(),
    });
    ev
}

fn stat(channel: Channel, period: Period, sent: u32, read: u32, converted: u32) -> ChannelStat {
    ChannelStat {
        channel,
        period,
        sent,
        read,
        converted,
    }
}

#[allow(clippy::too_many_arguments)]
fn agent(
    name: &str,
    model: &str,
    modality: Modality,
    status: AgentRunStatus,
    instructions: &str,
    tools: &[&str],
    max_tokens: u32,
    temperature: f32,
) -> AgentDefinition {
    AgentDefinition {
        name: name.to_string(),
        model: model.to_string(),
        modality,
        status,
        instructions: instructions.to_string(),
        tools: tools.iter().map(|t| t.to_string()).collect(),
        max_tokens,
        temperature,
    }
}

// ============================================================================
// CLINIC
// ============================================================================

static CLINIC: Lazy<IndustryDataset> = Lazy::new(|| IndustryDataset {
    profile: IndustryProfile {
        industry: Industry::Clinic,
        display_name: "Northgate Clinic",
        accent: "teal",
        entity_noun: "Patient",
        id_prefix: "APT",
    },
    records: vec![
        record(
            "APT-001",
            "Priya Sharma",
            "+44 7700 900101",
            "Tue 09:30 dental check-up, Dr. Okafor",
            d(2026, 3, 3),
            RecordStatus::Confirmed,
            12,
            vec![
                event(
                    "Mon 10:02",
                    "reminder",
                    EventDirection::Outbound,
                    DeliveryStatus::Read,
                    "Hi Priya, reminder for your check-up tomorrow at 09:30.",
                ),
                decided(
                    event(
                        "Mon 10:41",
                        "reply",
                        EventDirection::Inbound,
                        DeliveryStatus::Delivered,
                        "Yes, I'll be there. Thanks!",
                    ),
                    "Affirmative reply, confirmed without handoff",
                    96,
                    "Clinic Scheduler",
                ),
                event(
                    "Mon 10:41",
                    "confirmation",
                    EventDirection::System,
                    DeliveryStatus::Internal,
                    "Appointment marked confirmed.",
                ),
            ],
            &["Prefers morning slots.", "NHS referral on file."],
        ),
        record(
            "APT-002",
            "Marcus Webb",
            "+44 7700 900112",
            "Tue 11:00 physiotherapy, Suite 2",
            d(2026, 3, 3),
            RecordStatus::Escalated,
            78,
            vec![
                event(
                    "Mon 10:05",
                    "reminder",
                    EventDirection::Outbound,
                    DeliveryStatus::Read,
                    "Reminder: physio session tomorrow at 11:00.",
                ),
                event(
                    "Mon 12:17",
                    "reply",
                    EventDirection::Inbound,
                    DeliveryStatus::Delivered,
                    "I might need to cancel, my knee is worse and I can't drive.",
                ),
                decided(
                    event(
                        "Mon 12:17",
                        "escalation",
                        EventDirection::System,
                        DeliveryStatus::Internal,
                        "Routed to front desk: possible urgent rebooking.",
                    ),
                    "Patient reports worsening symptoms",
                    88,
                    "Clinic Triage",
                ),
            ],
            &["Second escalation this month."],
        ),
        record(
            "APT-003",
            "Elena Kovacs",
            "+44 7700 900118",
            "Wed 14:30 blood panel, Lab B",
            d(2026, 3, 4),
            RecordStatus::AwaitingReply,
            45,
            vec![event(
                "Mon 10:09",
                "reminder",
                EventDirection::Outbound,
                DeliveryStatus::Delivered,
                "Hi Elena, please confirm your lab visit on Wednesday 14:30.",
            )],
            &["Fasting required; flagged in reminder."],
        ),
        record(
            "APT-004",
            "Tom Okafor",
            "+44 7700 900131",
            "Thu 16:00 follow-up consult",
            d(2026, 3, 5),
            RecordStatus::DeliveryFailed,
            64,
            vec![event(
                "Mon 10:12",
                "reminder",
                EventDirection::Outbound,
                DeliveryStatus::Failed,
                "Message undeliverable: number unreachable.",
            )],
            &["Try landline on next attempt."],
        ),
        record(
            "APT-005",
            "Ava Lindqvist",
            "+44 7700 900144",
            "Fri 08:45 vaccination",
            d(2026, 3, 6),
            RecordStatus::Completed,
            5,
            vec![
                event(
                    "Thu 09:00",
                    "reminder",
                    EventDirection::Outbound,
                    DeliveryStatus::Read,
                    "See you tomorrow 08:45 for your vaccination.",
                ),
                event(
                    "Fri 09:20",
                    "check-out",
                    EventDirection::System,
                    DeliveryStatus::Internal,
                    "Visit completed, aftercare sheet sent.",
                ),
            ],
            &[],
        ),
    ],
    channel_stats: vec![
        stat(Channel::WhatsApp, Period::Today, 48, 41, 11),
        stat(Channel::Sms, Period::Today, 35, 22, 6),
        stat(Channel::Email, Period::Today, 20, 9, 1),
        stat(Channel::Voice, Period::Today, 6, 6, 3),
        stat(Channel::WhatsApp, Period::Week, 310, 268, 74),
        stat(Channel::Sms, Period::Week, 225, 140, 38),
        stat(Channel::Email, Period::Week, 130, 61, 9),
        stat(Channel::Voice, Period::Week, 41, 41, 19),
        stat(Channel::WhatsApp, Period::Month, 1260, 1071, 301),
        stat(Channel::Sms, Period::Month, 904, 569, 148),
        stat(Channel::Email, Period::Month, 512, 240, 35),
        stat(Channel::Voice, Period::Month, 166, 166, 77),
    ],
    agents: vec![
        agent(
            "Clinic Scheduler",
            "gpt-4o-mini",
            Modality::Text,
            AgentRunStatus::Active,
            "Confirm, reschedule, and remind patients about appointments. \
             Escalate any message mentioning symptoms to the triage agent.",
            &["calendar_lookup", "send_message", "escalate"],
            2048,
            0.2,
        ),
        agent(
            "Clinic Triage",
            "gpt-4o",
            Modality::Text,
            AgentRunStatus::Active,
            "Assess urgency of patient messages. Never give medical advice; \
             route urgent cases to front desk staff.",
            &["escalate", "flag_record"],
            4096,
            0.1,
        ),
        agent(
            "Clinic Voice Line",
            "realtime-voice-1",
            Modality::Voice,
            AgentRunStatus::Paused,
            "Answer after-hours calls, take rebooking requests, leave a \
             summary note on the record.",
            &["calendar_lookup", "append_note"],
            1024,
            0.3,
        ),
    ],
});

// ============================================================================
// HOTEL
// ============================================================================

static HOTEL: Lazy<IndustryDataset> = Lazy::new(|| IndustryDataset {
    profile: IndustryProfile {
        industry: Industry::Hotel,
        display_name: "Harborview Hotel",
        accent: "amber",
        entity_noun: "Guest",
        id_prefix: "BKG",
    },
    records: vec![
        record(
            "BKG-101",
            "Daniel Reyes",
            "+1 415 555 0164",
            "Check-in Fri, 3 nights, Deluxe King",
            d(2026, 3, 6),
            RecordStatus::Confirmed,
            8,
            vec![
                event(
                    "Wed 15:30",
                    "pre-arrival",
                    EventDirection::Outbound,
                    DeliveryStatus::Read,
                    "Your room will be ready from 15:00. Airport pickup?",
                ),
                event(
                    "Wed 16:02",
                    "reply",
                    EventDirection::Inbound,
                    DeliveryStatus::Delivered,
                    "No pickup needed, arriving by car.",
                ),
            ],
            &["Repeat guest, prefers high floor."],
        ),
        record(
            "BKG-102",
            "Sofia Bianchi",
            "+39 347 555 0012",
            "Check-in Sat, 2 nights, Twin",
            d(2026, 3, 7),
            RecordStatus::AwaitingReply,
            35,
            vec![event(
                "Thu 09:00",
                "payment-link",
                EventDirection::Outbound,
                DeliveryStatus::Delivered,
                "Please complete the deposit to guarantee your booking.",
            )],
            &["Deposit outstanding."],
        ),
        record(
            "BKG-103",
            "George Ansah",
            "+233 24 555 0199",
            "Check-in Fri, 1 night, Standard Queen",
            d(2026, 3, 6),
            RecordStatus::Escalated,
            81,
            vec![
                event(
                    "Thu 18:44",
                    "complaint",
                    EventDirection::Inbound,
                    DeliveryStatus::Delivered,
                    "I was charged twice for the deposit. Please fix this.",
                ),
                decided(
                    event(
                        "Thu 18:44",
                        "escalation",
                        EventDirection::System,
                        DeliveryStatus::Internal,
                        "Billing dispute routed to duty manager.",
                    ),
                    "Payment dispute requires human review",
                    93,
                    "Concierge Bot",
                ),
            ],
            &["Refund pending finance approval."],
        ),
        record(
            "BKG-104",
            "Mei Watanabe",
            "+81 90 5555 0123",
            "Check-in Sun, 4 nights, Suite",
            d(2026, 3, 8),
            RecordStatus::Cancelled,
            50,
            vec![event(
                "Fri 08:15",
                "cancellation",
                EventDirection::Inbound,
                DeliveryStatus::Delivered,
                "Flight cancelled, I need to cancel the stay entirely.",
            )],
            &["Refund issued under flex rate."],
        ),
    ],
    channel_stats: vec![
        stat(Channel::WhatsApp, Period::Today, 62, 55, 18),
        stat(Channel::Sms, Period::Today, 18, 12, 2),
        stat(Channel::Email, Period::Today, 44, 30, 7),
        stat(Channel::Voice, Period::Today, 11, 11, 5),
        stat(Channel::WhatsApp, Period::Week, 401, 352, 120),
        stat(Channel::Sms, Period::Week, 122, 84, 15),
        stat(Channel::Email, Period::Week, 287, 199, 44),
        stat(Channel::Voice, Period::Week, 73, 73, 31),
        stat(Channel::WhatsApp, Period::Month, 1688, 1460, 486),
        stat(Channel::Sms, Period::Month, 512, 343, 58),
        stat(Channel::Email, Period::Month, 1150, 801, 182),
        stat(Channel::Voice, Period::Month, 295, 295, 124),
    ],
    agents: vec![
        agent(
            "Concierge Bot",
            "gpt-4o-mini",
            Modality::Text,
            AgentRunStatus::Active,
            "Handle pre-arrival questions, upsell upgrades, route billing \
             disputes to the duty manager.",
            &["booking_lookup", "send_message", "escalate"],
            2048,
            0.4,
        ),
        agent(
            "Night Desk Voice",
            "realtime-voice-1",
            Modality::Voice,
            AgentRunStatus::Active,
            "Answer calls between 23:00 and 07:00. Take messages and page \
             the night porter for lockouts.",
            &["booking_lookup", "append_note"],
            1024,
            0.3,
        ),
    ],
});

// ============================================================================
// SALES
// ============================================================================

static SALES: Lazy<IndustryDataset> = Lazy::new(|| IndustryDataset {
    profile: IndustryProfile {
        industry: Industry::Sales,
        display_name: "Meridian Sales",
        accent: "violet",
        entity_noun: "Client",
        id_prefix: "DEAL",
    },
    records: vec![
        record(
            "DEAL-310",
            "Hannah Cole",
            "+1 212 555 0147",
            "Demo call Thu 15:00, Q2 renewal",
            d(2026, 3, 5),
            RecordStatus::Pending,
            40,
            vec![event(
                "Tue 11:20",
                "follow-up",
                EventDirection::Outbound,
                DeliveryStatus::Read,
                "Sending over the revised quote ahead of Thursday.",
            )],
            &["Decision maker on the call."],
        ),
        record(
            "DEAL-311",
            "Viktor Petrov",
            "+359 88 555 0133",
            "Contract review, closing target Mar 12",
            d(2026, 3, 12),
            RecordStatus::Escalated,
            72,
            vec![
                event(
                    "Mon 09:48",
                    "reply",
                    EventDirection::Inbound,
                    DeliveryStatus::Delivered,
                    "Legal flagged the liability clause, we need a call.",
                ),
                decided(
                    event(
                        "Mon 09:48",
                        "escalation",
                        EventDirection::System,
                        DeliveryStatus::Internal,
                        "Routed to account executive for clause negotiation.",
                    ),
                    "Contract objection beyond playbook scope",
                    85,
                    "SDR Assistant",
                ),
            ],
            &["Renewal worth $84k ARR."],
        ),
        record(
            "DEAL-312",
            "Amara Diallo",
            "+221 77 555 0121",
            "Intro call Wed 10:00",
            d(2026, 3, 4),
            RecordStatus::Completed,
            10,
            vec![
                event(
                    "Wed 10:45",
                    "summary",
                    EventDirection::System,
                    DeliveryStatus::Internal,
                    "Call held; next step proposal by Friday.",
                ),
                event(
                    "Wed 11:00",
                    "follow-up",
                    EventDirection::Outbound,
                    DeliveryStatus::Delivered,
                    "Great speaking today. Proposal to follow by Friday.",
                ),
            ],
            &[],
        ),
        record(
            "DEAL-313",
            "Lars Eriksen",
            "+47 912 55 013",
            "Pricing follow-up, no reply since Feb",
            d(2026, 2, 24),
            RecordStatus::NoResponse,
            66,
            vec![event(
                "Tue 08:30",
                "nudge",
                EventDirection::Outbound,
                DeliveryStatus::Delivered,
                "Checking in on the pricing deck from last week.",
            )],
            &["Third nudge sent; park after one more."],
        ),
    ],
    channel_stats: vec![
        stat(Channel::WhatsApp, Period::Today, 24, 19, 4),
        stat(Channel::Sms, Period::Today, 12, 8, 1),
        stat(Channel::Email, Period::Today, 96, 54, 12),
        stat(Channel::Voice, Period::Today, 17, 17, 6),
        stat(Channel::WhatsApp, Period::Week, 150, 121, 28),
        stat(Channel::Sms, Period::Week, 80, 52, 9),
        stat(Channel::Email, Period::Week, 610, 355, 71),
        stat(Channel::Voice, Period::Week, 104, 104, 39),
        stat(Channel::WhatsApp, Period::Month, 640, 512, 118),
        stat(Channel::Sms, Period::Month, 330, 214, 36),
        stat(Channel::Email, Period::Month, 2470, 1420, 286),
        stat(Channel::Voice, Period::Month, 428, 428, 161),
    ],
    agents: vec![
        agent(
            "SDR Assistant",
            "gpt-4o",
            Modality::Text,
            AgentRunStatus::Active,
            "Qualify inbound leads, schedule demos, hand objections to the \
             account executive.",
            &["crm_lookup", "send_message", "book_meeting", "escalate"],
            4096,
            0.5,
        ),
        agent(
            "Renewal Nudger",
            "gpt-4o-mini",
            Modality::Text,
            AgentRunStatus::Paused,
            "Send spaced follow-ups on stale renewals. Stop after three \
             unanswered nudges.",
            &["crm_lookup", "send_message"],
            1024,
            0.3,
        ),
    ],
});

// ============================================================================
// INSURANCE
// ============================================================================

static INSURANCE: Lazy<IndustryDataset> = Lazy::new(|| IndustryDataset {
    profile: IndustryProfile {
        industry: Industry::Insurance,
        display_name: "Keystone Insurance",
        accent: "blue",
        entity_noun: "Customer",
        id_prefix: "POL",
    },
    records: vec![
        record(
            "POL-501",
            "Janet Mbeki",
            "+27 82 555 0177",
            "Auto policy renewal due Mar 15",
            d(2026, 3, 15),
            RecordStatus::AwaitingReply,
            55,
            vec![event(
                "Mon 09:00",
                "renewal-notice",
                EventDirection::Outbound,
                DeliveryStatus::Read,
                "Your auto policy renews Mar 15. Reply YES to keep cover.",
            )],
            &["Premium up 4% on renewal."],
        ),
        record(
            "POL-502",
            "Owen Gallagher",
            "+353 86 555 0150",
            "Claim #CL-2214 document collection",
            d(2026, 3, 4),
            RecordStatus::Escalated,
            90,
            vec![
                event(
                    "Tue 14:12",
                    "reply",
                    EventDirection::Inbound,
                    DeliveryStatus::Delivered,
                    "This is the fourth time I'm sending these photos!",
                ),
                decided(
                    event(
                        "Tue 14:12",
                        "escalation",
                        EventDirection::System,
                        DeliveryStatus::Internal,
                        "Sentiment negative, routed to claims handler.",
                    ),
                    "Repeated friction on document upload",
                    91,
                    "Claims Intake",
                ),
            ],
            &["Handler callback promised within 24h."],
        ),
        record(
            "POL-503",
            "Fatima Al-Rashid",
            "+971 50 555 0188",
            "Home policy quote follow-up",
            d(2026, 3, 2),
            RecordStatus::Confirmed,
            15,
            vec![
                event(
                    "Mon 10:30",
                    "quote",
                    EventDirection::Outbound,
                    DeliveryStatus::Read,
                    "Here is your home cover quote, valid 30 days.",
                ),
                event(
                    "Mon 13:05",
                    "reply",
                    EventDirection::Inbound,
                    DeliveryStatus::Delivered,
                    "Accepted. Please proceed with the paperwork.",
                ),
            ],
            &[],
        ),
        record(
            "POL-504",
            "Pietro Rossi",
            "+39 333 555 0102",
            "Life policy medical form outstanding",
            d(2026, 3, 9),
            RecordStatus::DeliveryFailed,
            70,
            vec![event(
                "Wed 08:50",
                "form-request",
                EventDirection::Outbound,
                DeliveryStatus::Failed,
                "Email bounced: mailbox full.",
            )],
            &["Switch to SMS for next contact."],
        ),
    ],
    channel_stats: vec![
        stat(Channel::WhatsApp, Period::Today, 31, 26, 7),
        stat(Channel::Sms, Period::Today, 58, 39, 9),
        stat(Channel::Email, Period::Today, 73, 41, 8),
        stat(Channel::Voice, Period::Today, 14, 14, 6),
        stat(Channel::WhatsApp, Period::Week, 204, 172, 49),
        stat(Channel::Sms, Period::Week, 371, 248, 61),
        stat(Channel::Email, Period::Week, 459, 262, 52),
        stat(Channel::Voice, Period::Week, 92, 92, 40),
        stat(Channel::WhatsApp, Period::Month, 812, 690, 195),
        stat(Channel::Sms, Period::Month, 1490, 996, 243),
        stat(Channel::Email, Period::Month, 1860, 1058, 207),
        stat(Channel::Voice, Period::Month, 377, 377, 163),
    ],
    agents: vec![
        agent(
            "Claims Intake",
            "gpt-4o",
            Modality::Text,
            AgentRunStatus::Active,
            "Collect claim documents, acknowledge uploads, escalate negative \
             sentiment to a human handler.",
            &["policy_lookup", "send_message", "escalate", "flag_record"],
            4096,
            0.2,
        ),
        agent(
            "Renewal Reminder",
            "gpt-4o-mini",
            Modality::Text,
            AgentRunStatus::Active,
            "Send renewal notices and process YES confirmations.",
            &["policy_lookup", "send_message"],
            1024,
            0.1,
        ),
        agent(
            "Quote Line",
            "realtime-voice-1",
            Modality::Voice,
            AgentRunStatus::Paused,
            "Answer quote-line calls, capture details, send the written \
             quote by the customer's preferred channel.",
            &["policy_lookup", "send_message"],
            2048,
            0.4,
        ),
    ],
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_industry_has_a_dataset() {
        for industry in Industry::all() {
            let data = dataset(*industry);
            assert_eq!(data.profile.industry, *industry);
            assert!(!data.records.is_empty());
            assert!(!data.channel_stats.is_empty());
            assert!(!data.agents.is_empty());
        }
    }

    #[test]
    fn clinic_contains_priya_as_apt_001() {
        let clinic = dataset(Industry::Clinic);
        let record = clinic
            .records
            .iter()
            .find(|r| r.record_id == "APT-001")
            .expect("APT-001 present");
        assert!(record.contact_name.contains("Priya"));
    }

    #[test]
    fn record_ids_carry_the_industry_prefix() {
        for industry in Industry::all() {
            let data = dataset(*industry);
            for record in &data.records {
                assert!(
                    record.record_id.starts_with(data.profile.id_prefix),
                    "{} should start with {}",
                    record.record_id,
                    data.profile.id_prefix
                );
            }
        }
    }

    #[test]
    fn record_ids_are_unique_within_an_industry() {
        for industry in Industry::all() {
            let data = dataset(*industry);
            let mut ids: Vec<&str> = data.records.iter().map(|r| r.record_id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), data.records.len());
        }
    }

    #[test]
    fn seed_records_pass_validation() {
        for industry in Industry::all() {
            for record in &dataset(*industry).records {
                record.validate().expect("seed record valid");
            }
        }
    }

    #[test]
    fn channel_stats_cover_every_period() {
        for industry in Industry::all() {
            let data = dataset(*industry);
            for period in Period::all() {
                let count = data
                    .channel_stats
                    .iter()
                    .filter(|s| s.period == *period)
                    .count();
                assert_eq!(count, Channel::all().len());
            }
        }
    }

    #[test]
    fn channel_stat_counts_are_monotone() {
        // read <= sent and converted <= sent for every seed stat.
        for industry in Industry::all() {
            for stat in &dataset(*industry).channel_stats {
                assert!(stat.read <= stat.sent);
                assert!(stat.converted <= stat.sent);
            }
        }
    }

    #[test]
    fn system_events_are_internal() {
        for industry in Industry::all() {
            for record in &dataset(*industry).records {
                for ev in &record.timeline {
                    if ev.direction == EventDirection::System {
                        assert_eq!(ev.delivery, DeliveryStatus::Internal);
                    }
                }
            }
        }
    }
}
