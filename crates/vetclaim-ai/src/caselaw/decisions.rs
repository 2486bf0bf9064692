use super::{CaseRecord, Court};
use crate::claims::domain::ConditionId;

struct DecisionSeed {
    id: &'static str,
    citation: &'static str,
    title: &'static str,
    court: Court,
    year: u16,
    topics: &'static [&'static str],
    conditions: &'static [&'static str],
    holding: &'static str,
}

const DECISIONS: &[DecisionSeed] = &[
    DecisionSeed {
        id: "nieves-rodriguez-2008",
        citation: "22 Vet. App. 295",
        title: "Nieves-Rodriguez v. Peake",
        court: Court::Cavc,
        year: 2008,
        topics: &["nexus opinion", "medical opinion", "probative value"],
        conditions: &[],
        holding: "Most of the probative value of a medical opinion comes from its reasoning; a nexus opinion without a supporting rationale carries little weight.",
    },
    DecisionSeed {
        id: "jandreau-2007",
        citation: "492 F.3d 1372",
        title: "Jandreau v. Nicholson",
        court: Court::FederalCircuit,
        year: 2007,
        topics: &["lay evidence", "diagnosis", "competency"],
        conditions: &["tinnitus", "knee_condition"],
        holding: "Lay evidence can establish a diagnosis when the layperson is competent to identify the condition, reports a contemporaneous medical diagnosis, or describes symptoms that later support a diagnosis.",
    },
    DecisionSeed {
        id: "clemons-2009",
        citation: "23 Vet. App. 1",
        title: "Clemons v. Shinseki",
        court: Court::Cavc,
        year: 2009,
        topics: &["claim scope", "mental health", "diagnosis"],
        conditions: &["ptsd", "depression"],
        holding: "A claim for one mental disorder encompasses any mental disability reasonably raised by the symptoms described and the record, regardless of the specific diagnosis named.",
    },
    DecisionSeed {
        id: "buchanan-2006",
        citation: "451 F.3d 1331",
        title: "Buchanan v. Nicholson",
        court: Court::FederalCircuit,
        year: 2006,
        topics: &["lay evidence", "contemporaneous records", "credibility"],
        conditions: &["depression"],
        holding: "The Board may not find lay evidence lacking in credibility solely because it is unaccompanied by contemporaneous medical records.",
    },
    DecisionSeed {
        id: "gilbert-1990",
        citation: "1 Vet. App. 49",
        title: "Gilbert v. Derwinski",
        court: Court::Cavc,
        year: 1990,
        topics: &["benefit of the doubt", "reasons and bases", "equipoise"],
        conditions: &[],
        holding: "When the positive and negative evidence is in approximate balance the veteran prevails, and the Board must give adequate reasons and bases for its findings.",
    },
    DecisionSeed {
        id: "allen-1995",
        citation: "7 Vet. App. 439",
        title: "Allen v. Brown",
        court: Court::Cavc,
        year: 1995,
        topics: &["secondary service connection", "aggravation"],
        conditions: &["sleep_apnea", "hypertension", "radiculopathy", "gerd"],
        holding: "Secondary service connection is available when a service-connected disability aggravates a nonservice-connected condition, compensating the degree of aggravation.",
    },
    DecisionSeed {
        id: "rice-2009",
        citation: "22 Vet. App. 447",
        title: "Rice v. Shinseki",
        court: Court::Cavc,
        year: 2009,
        topics: &["tdiu", "unemployability", "increased rating"],
        conditions: &[],
        holding: "A request for total disability based on individual unemployability is part of an increased rating claim when unemployability is raised by the record.",
    },
    DecisionSeed {
        id: "walker-2013",
        citation: "708 F.3d 1331",
        title: "Walker v. Shinseki",
        court: Court::FederalCircuit,
        year: 2013,
        topics: &["continuity of symptomatology", "chronic disease", "presumptive"],
        conditions: &["hearing_loss", "tinnitus", "hypertension"],
        holding: "Continuity of symptomatology under 38 C.F.R. 3.303(b) applies only to the chronic diseases listed in 38 C.F.R. 3.309(a).",
    },
    DecisionSeed {
        id: "saunders-2018",
        citation: "886 F.3d 1356",
        title: "Saunders v. Wilkie",
        court: Court::FederalCircuit,
        year: 2018,
        topics: &["pain", "functional impairment", "disability"],
        conditions: &["knee_condition", "lumbar_strain"],
        holding: "Pain alone, without an accompanying diagnosis, can be a disability when it reaches the level of functional impairment of earning capacity.",
    },
];

pub(super) fn records() -> Vec<CaseRecord> {
    DECISIONS
        .iter()
        .map(|seed| CaseRecord {
            id: seed.id.to_string(),
            citation: seed.citation.to_string(),
            title: seed.title.to_string(),
            court: seed.court,
            year: seed.year,
            topics: seed.topics.iter().map(|topic| topic.to_string()).collect(),
            conditions: seed
                .conditions
                .iter()
                .copied()
                .map(ConditionId::new)
                .collect(),
            holding: seed.holding.to_string(),
        })
        .collect()
}
