use super::CatalogEntry;
use super::model::ImplementationGroup::{IG1, IG2};

// NIST SP 800-53 Rev 5 core family controls.
pub(super) const NIST_CONTROLS: &[CatalogEntry] = &[
    CatalogEntry {
        id: "NIST-AC-1",
        name: "Policy and Procedures",
        description: "Develop, document, and disseminate an access control policy and procedures.",
        nist_mapping: &["AC-1"],
        level: IG1,
        category: "Access Control (AC)",
    },
    CatalogEntry {
        id: "NIST-AC-2",
        name: "Account Management",
        description: "Establish and maintain account management processes for information system accounts including identifying account types, establishing conditions for group and role membership, and assigning account managers.",
        nist_mapping: &["AC-2"],
        level: IG1,
        category: "Access Control (AC)",
    },
    CatalogEntry {
        id: "NIST-AC-3",
        name: "Access Enforcement",
        description: "Enforce approved authorizations for logical access to information and system resources in accordance with applicable access control policies.",
        nist_mapping: &["AC-3"],
        level: IG1,
        category: "Access Control (AC)",
    },
    CatalogEntry {
        id: "NIST-AC-4",
        name: "Information Flow Enforcement",
        description: "Enforce approved authorizations for controlling the flow of information within the system and between connected systems based on applicable policy.",
        nist_mapping: &["AC-4"],
        level: IG2,
        category: "Access Control (AC)",
    },
    CatalogEntry {
        id: "NIST-AC-5",
        name: "Separation of Duties",
        description: "Separate duties of individuals as necessary to prevent malevolent activity; document separation of duties; and implement separation of duties through assigned information system access authorizations.",
        nist_mapping: &["AC-5"],
        level: IG2,
        category: "Access Control (AC)",
    },
    CatalogEntry {
        id: "NIST-AT-1",
        name: "Policy and Procedures",
        description: "Develop, document, and disseminate security awareness and training policy and procedures.",
        nist_mapping: &["AT-1"],
        level: IG1,
        category: "Awareness and Training (AT)",
    },
    CatalogEntry {
        id: "NIST-AT-2",
        name: "Literacy Training and Awareness",
        description: "Provide security and privacy literacy training to system users, including role-based training for individuals with assigned security and privacy roles and responsibilities.",
        nist_mapping: &["AT-2"],
        level: IG1,
        category: "Awareness and Training (AT)",
    },
    CatalogEntry {
        id: "NIST-AT-3",
        name: "Role-Based Training",
        description: "Provide role-based security and privacy training to personnel with assigned security and privacy roles and responsibilities.",
        nist_mapping: &["AT-3"],
        level: IG1,
        category: "Awareness and Training (AT)",
    },
    CatalogEntry {
        id: "NIST-AT-4",
        name: "Training Records",
        description: "Document and monitor individual information system security and privacy training activities including basic security and privacy literacy training and specific role-based information system security and privacy training.",
        nist_mapping: &["AT-4"],
        level: IG1,
        category: "Awareness and Training (AT)",
    },
    CatalogEntry {
        id: "NIST-AU-1",
        name: "Policy and Procedures",
        description: "Develop, document, and disseminate an audit and accountability policy and procedures.",
        nist_mapping: &["AU-1"],
        level: IG1,
        category: "Audit and Accountability (AU)",
    },
    CatalogEntry {
        id: "NIST-AU-2",
        name: "Event Logging",
        description: "Identify the types of events that the system is capable of logging in support of the audit function, coordinate the audit function with other organizational entities requiring audit-related information, and specify the level of events to be logged.",
        nist_mapping: &["AU-2"],
        level: IG1,
        category: "Audit and Accountability (AU)",
    },
    CatalogEntry {
        id: "NIST-AU-3",
        name: "Content of Audit Records",
        description: "Ensure that audit records contain information that establishes the following: what type of event occurred, when the event occurred, where the event occurred, the source of the event, and the outcome of the event.",
        nist_mapping: &["AU-3"],
        level: IG1,
        category: "Audit and Accountability (AU)",
    },
    CatalogEntry {
        id: "NIST-CA-1",
        name: "Policy and Procedures",
        description: "Develop, document, and disseminate an assessment, authorization, and monitoring policy and procedures.",
        nist_mapping: &["CA-1"],
        level: IG1,
        category: "Security Assessment and Authorization (CA)",
    },
    CatalogEntry {
        id: "NIST-CA-2",
        name: "Control Assessments",
        description: "Develop a control assessment plan and assess the controls in the system and its environment of operation to determine the effectiveness of the controls.",
        nist_mapping: &["CA-2"],
        level: IG1,
        category: "Security Assessment and Authorization (CA)",
    },
    CatalogEntry {
        id: "NIST-CA-3",
        name: "Information Exchange",
        description: "Approve and manage the exchange of information between the system and other systems using interconnection security agreements, information exchange security agreements, or other means of documenting protections.",
        nist_mapping: &["CA-3"],
        level: IG2,
        category: "Security Assessment and Authorization (CA)",
    },
    CatalogEntry {
        id: "NIST-CM-1",
        name: "Policy and Procedures",
        description: "Develop, document, and disseminate a configuration management policy and procedures.",
        nist_mapping: &["CM-1"],
        level: IG1,
        category: "Configuration Management (CM)",
    },
    CatalogEntry {
        id: "NIST-CM-2",
        name: "Baseline Configuration",
        description: "Develop, document, and maintain under configuration control, a current baseline configuration of the system.",
        nist_mapping: &["CM-2"],
        level: IG1,
        category: "Configuration Management (CM)",
    },
    CatalogEntry {
        id: "NIST-CM-3",
        name: "Configuration Change Control",
        description: "Document and manage configuration changes to the system using the organizational configuration management process.",
        nist_mapping: &["CM-3"],
        level: IG2,
        category: "Configuration Management (CM)",
    },
    CatalogEntry {
        id: "NIST-CP-1",
        name: "Policy and Procedures",
        description: "Develop, document, and disseminate a contingency planning policy and procedures.",
        nist_mapping: &["CP-1"],
        level: IG1,
        category: "Contingency Planning (CP)",
    },
    CatalogEntry {
        id: "NIST-CP-2",
        name: "Contingency Plan",
        description: "Develop and maintain a contingency plan for the system that identifies essential missions and business functions, provides recovery objectives, and restoration priorities.",
        nist_mapping: &["CP-2"],
        level: IG1,
        category: "Contingency Planning (CP)",
    },
    CatalogEntry {
        id: "NIST-CP-3",
        name: "Contingency Training",
        description: "Provide contingency training to system users consistent with assigned roles and responsibilities.",
        nist_mapping: &["CP-3"],
        level: IG2,
        category: "Contingency Planning (CP)",
    },
    CatalogEntry {
        id: "NIST-IA-1",
        name: "Policy and Procedures",
        description: "Develop, document, and disseminate an identification and authentication policy and procedures.",
        nist_mapping: &["IA-1"],
        level: IG1,
        category: "Identification and Authentication (IA)",
    },
    CatalogEntry {
        id: "NIST-IR-1",
        name: "Policy and Procedures",
        description: "Develop, document, and disseminate an incident response policy and procedures.",
        nist_mapping: &["IR-1"],
        level: IG1,
        category: "Incident Response (IR)",
    },
    CatalogEntry {
        id: "NIST-MA-1",
        name: "Policy and Procedures",
        description: "Develop, document, and disseminate a system maintenance policy and procedures.",
        nist_mapping: &["MA-1"],
        level: IG1,
        category: "Maintenance (MA)",
    },
    CatalogEntry {
        id: "NIST-MP-1",
        name: "Policy and Procedures",
        description: "Develop, document, and disseminate a media protection policy and procedures.",
        nist_mapping: &["MP-1"],
        level: IG1,
        category: "Media Protection (MP)",
    },
    CatalogEntry {
        id: "NIST-PE-1",
        name: "Policy and Procedures",
        description: "Develop, document, and disseminate a physical and environmental protection policy and procedures.",
        nist_mapping: &["PE-1"],
        level: IG1,
        category: "Physical and Environmental Protection (PE)",
    },
    CatalogEntry {
        id: "NIST-PL-1",
        name: "Policy and Procedures",
        description: "Develop, document, and disseminate a security and privacy planning policy and procedures.",
        nist_mapping: &["PL-1"],
        level: IG1,
        category: "Planning (PL)",
    },
    CatalogEntry {
        id: "NIST-PM-1",
        name: "Information Security Program Plan",
        description: "Develop and disseminate an organization-wide information security program plan.",
        nist_mapping: &["PM-1"],
        level: IG1,
        category: "Program Management (PM)",
    },
    CatalogEntry {
        id: "NIST-PS-1",
        name: "Policy and Procedures",
        description: "Develop, document, and disseminate a personnel security policy and procedures.",
        nist_mapping: &["PS-1"],
        level: IG1,
        category: "Personnel Security (PS)",
    },
    CatalogEntry {
        id: "NIST-RA-1",
        name: "Policy and Procedures",
        description: "Develop, document, and disseminate a risk assessment policy and procedures.",
        nist_mapping: &["RA-1"],
        level: IG1,
        category: "Risk Assessment (RA)",
    },
    CatalogEntry {
        id: "NIST-SA-1",
        name: "Policy and Procedures",
        description: "Develop, document, and disseminate a system and services acquisition policy and procedures.",
        nist_mapping: &["SA-1"],
        level: IG1,
        category: "System and Services Acquisition (SA)",
    },
    CatalogEntry {
        id: "NIST-SC-1",
        name: "Policy and Procedures",
        description: "Develop, document, and disseminate a system and communications protection policy and procedures.",
        nist_mapping: &["SC-1"],
        level: IG1,
        category: "System and Communications Protection (SC)",
    },
    CatalogEntry {
        id: "NIST-SI-1",
        name: "Policy and Procedures",
        description: "Develop, document, and disseminate a system and information integrity policy and procedures.",
        nist_mapping: &["SI-1"],
        level: IG1,
        category: "System and Information Integrity (SI)",
    },
    CatalogEntry {
        id: "NIST-SR-1",
        name: "Policy and Procedures",
        description: "Develop, document, and disseminate a supply chain risk management policy and procedures.",
        nist_mapping: &["SR-1"],
        level: IG1,
        category: "Supply Chain Risk Management (SR)",
    },
];
