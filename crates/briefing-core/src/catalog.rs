//! The CCSP briefing: ten slides of literal content.

use crate::models::rich_text::RichText;
use crate::models::slide::{Deck, SlideLayout, SlideRecord};
use crate::models::visual::{BarChart, Series, Stat, VisualAttachment};
use crate::theme::PaletteColor;

pub const DECK_TITLE: &str = "Cloud Security Transformation with CCSP";

/// Base name shared by both generated artifacts.
pub const ARTIFACT_STEM: &str = "cloud_security_ccsp";

/// Build the full ten-slide deck.
pub fn ccsp_deck() -> Deck {
    Deck {
        title: DECK_TITLE.to_string(),
        slides: vec![
            welcome(),
            cloud_vs_on_prem(),
            biggest_concern(),
            key_challenges(),
            domains_overview(),
            best_practices(),
            case_study(),
            knowledge_check(),
            actionable_steps(),
            strategize_and_scale(),
        ],
    }
}

fn slide(title: &str, body: &str) -> SlideRecord {
    SlideRecord {
        title: title.to_string(),
        layout: SlideLayout::TitleAndContent,
        accent: None,
        body: RichText::new(body),
        visuals: Vec::new(),
    }
}

fn stat(label: &str, caption: &str) -> Stat {
    Stat {
        label: label.to_string(),
        caption: caption.to_string(),
    }
}

fn diagram(text: &str) -> VisualAttachment {
    VisualAttachment::CalloutBox {
        text: RichText::new(text),
        fill: PaletteColor::NeutralLight,
        monospace: true,
    }
}

fn callout(text: &str, fill: PaletteColor) -> VisualAttachment {
    VisualAttachment::CalloutBox {
        text: RichText::new(text),
        fill,
        monospace: false,
    }
}

fn welcome() -> SlideRecord {
    SlideRecord {
        layout: SlideLayout::Title,
        accent: Some(RichText::new(concat!(
            "Securing the Cloud Journey<br/><br/>",
            "Cloud adoption fuels innovation, but security risks like misconfigurations, ",
            "API vulnerabilities, and compliance gaps threaten enterprises. CCSP equips all ",
            "levels—beginners to advanced professionals—to build resilient, compliant ",
            "multi-cloud systems.",
        ))),
        visuals: vec![VisualAttachment::StatGrid {
            entries: vec![
                stat("High", "Cost of breaches"),
                stat("Critical", "Multi-cloud governance"),
                stat("Strategic", "CCSP-driven resilience"),
            ],
        }],
        ..slide(DECK_TITLE, "")
    }
}

fn cloud_vs_on_prem() -> SlideRecord {
    let mut record = slide(
        "Cloud vs. On-Premises Risks",
        concat!(
            "Basic and Advanced Risk Analysis<br/>",
            "<b>Cloud-Specific Risks:</b><br/>",
            "• Basic: Shared responsibility confusion (e.g., AWS S3 settings); multi-tenancy risks.<br/>",
            "• Advanced: Inconsistent multi-cloud governance; API vulnerabilities (e.g., Lambda).<br/>",
            "• Examples: 2018 S3 leak (basic); 2020 Twilio API breach (advanced).<br/>",
            "• Implications: Beginners—Learn roles. Intermediate—Use CSPM. Advanced—Standardize (Domain 1).<br/><br/>",
            "<b>On-Premises Risks:</b><br/>",
            "• Basic: Physical vulnerabilities; unpatched legacy systems.<br/>",
            "• Advanced: Limited DR redundancy; manual governance.<br/>",
            "• Examples: Equifax 2017 (basic); outdated servers (advanced).<br/>",
            "• Implications: Beginners—Patch. Intermediate—Automate backups. Advanced—Hybrid monitoring (Domain 5).<br/><br/>",
            "<b>Shared Risks:</b><br/>",
            "• Basic: Data breaches; insider threats.<br/>",
            "• Advanced: APTs; global compliance (GDPR, CCPA).<br/>",
            "• Examples: Target 2013 (basic); 2021 SolarWinds (advanced).<br/>",
            "• Implications: Beginners—Basic controls. Intermediate—SIEM. Advanced—Hybrid (Domains 1, 5).",
        ),
    );
    record.visuals.push(diagram(concat!(
        "[Cloud Risks]         [Shared Risks]         [On-Prem Risks]<br/>",
        " | S3 Misconfig |----| Breaches, APTs |----| Legacy Systems |<br/>",
        " | APIs, Shadow IT|----| Insider, Compliance|----| Physical, Manual |<br/>",
        " | Domain 1, 4   |----| Domain 1, 5    |----| Domain 5        |",
    )));
    record
}

fn biggest_concern() -> SlideRecord {
    slide(
        "Your Biggest Cloud Security Concern",
        concat!(
            "Prioritize Challenges for All Levels<br/><br/>",
            "<b>Misconfigured Services (Domain 1):</b><br/>",
            "• Impact: Exposed data due to improper settings.<br/>",
            "• Example: 2018 S3 bucket leak.<br/>",
            "• Implications: Beginners—Check defaults. Intermediate—AWS Config. Advanced—Automate audits.<br/><br/>",
            "<b>Lack of Visibility (Domain 5):</b><br/>",
            "• Impact: Delayed threat detection.<br/>",
            "• Example: Target 2013 breach.<br/>",
            "• Implications: Beginners—Learn monitoring. Intermediate—Splunk. Advanced—UEBA (Sentinel).<br/><br/>",
            "<b>Multi-Cloud Governance (Domain 1):</b><br/>",
            "• Impact: Inconsistent policies.<br/>",
            "• Example: 2019 Capital One IAM.<br/>",
            "• Implications: Beginners—Learn governance. Intermediate—AWS Organizations. Advanced—Standardize.<br/><br/>",
            "<b>API and Serverless Security (Domain 4):</b><br/>",
            "• Impact: Exposed endpoints.<br/>",
            "• Example: 2020 Twilio API breach.<br/>",
            "• Implications: Beginners—API basics. Intermediate—OAuth. Advanced—API Gateway.",
        ),
    )
}

fn key_challenges() -> SlideRecord {
    slide(
        "Key Security Challenges in Cloud",
        concat!(
            "Basic and Advanced CCSP Mitigations<br/><br/>",
            "1. <b>Shared Responsibility Confusion:</b><br/>",
            "• Issue: Misunderstanding roles. Example: 2018 S3 leak.<br/>",
            "• Domains: 1 (Responsibility), 5 (Configuration).<br/>",
            "• Mitigation: Basic—Domain 1 matrix. Intermediate—AWS Config. Advanced—Azure Policy.<br/><br/>",
            "2. <b>Multi-Cloud Governance:</b><br/>",
            "• Issue: Inconsistent policies. Example: Capital One 2019.<br/>",
            "• Domains: 1, 5.<br/>",
            "• Mitigation: Basic—Learn governance. Intermediate—AWS Organizations. Advanced—ServiceNow GRC.<br/><br/>",
            "3. <b>Data Loss and Leakage:</b><br/>",
            "• Issue: Exposed data. Example: 2018 voter leak.<br/>",
            "• Domains: 2 (Encryption), 3 (Storage).<br/>",
            "• Mitigation: Basic—Encrypt. Intermediate—AWS Macie. Advanced—Vault.<br/><br/>",
            "4. <b>API and Serverless Security:</b><br/>",
            "• Issue: Exposed endpoints. Example: 2020 Twilio.<br/>",
            "• Domains: 2, 4.<br/>",
            "• Mitigation: Basic—OAuth. Intermediate—API Gateway. Advanced—Snyk.<br/><br/>",
            "5. <b>Visibility and Threat Detection:</b><br/>",
            "• Issue: Delayed detection. Example: 2021 SolarWinds.<br/>",
            "• Domains: 3, 5.<br/>",
            "• Mitigation: Basic—Monitoring. Intermediate—Splunk. Advanced—Cortex XSOAR.",
        ),
    )
}

fn domains_overview() -> SlideRecord {
    slide(
        "CCSP Domains for Transformation",
        concat!(
            "Six Pillars for All Levels<br/><br/>",
            "1. <b>Cloud Concepts, Architecture & Design:</b><br/>",
            "• Principle: Align models with business needs.<br/>",
            "• Example: Netflix hybrid (advanced); IaaS/PaaS (basic).<br/>",
            "• Tools: Beginner—AWS Config. Advanced—AWS Organizations, Azure Policy.<br/><br/>",
            "2. <b>Cloud Data Security:</b><br/>",
            "• Principle: Protect data with encryption, DLP.<br/>",
            "• Example: Dropbox AES-256 (basic); Vault (advanced).<br/>",
            "• Tools: AWS KMS, Vault.<br/><br/>",
            "3. <b>Cloud Platform & Infrastructure Security:</b><br/>",
            "• Principle: Secure networks, containers.<br/>",
            "• Example: VPC (basic); Kubernetes with Istio (advanced).<br/>",
            "• Tools: AWS VPC, Istio.<br/><br/>",
            "4. <b>Cloud Application Security:</b><br/>",
            "• Principle: Embed security in apps.<br/>",
            "• Example: Secure coding (basic); Snyk with GitHub Actions (advanced).<br/>",
            "• Tools: Code reviews, Snyk.<br/><br/>",
            "5. <b>Cloud Security Operations:</b><br/>",
            "• Principle: Automate monitoring, response.<br/>",
            "• Example: Splunk (basic); Cortex XSOAR (advanced).<br/>",
            "• Tools: Splunk, XSOAR.<br/><br/>",
            "6. <b>Legal, Risk & Compliance:</b><br/>",
            "• Principle: Ensure compliance.<br/>",
            "• Example: GDPR checks (basic); OneTrust (advanced).<br/>",
            "• Tools: Manual audits, OneTrust.",
        ),
    )
}

fn best_practices() -> SlideRecord {
    let mut record = slide(
        "Best Practices for Secure Cloud Adoption",
        concat!(
            "Phased Approach for All Levels<br/><br/>",
            "<b>Phase 1: Assessment (Domain 1, 6):</b><br/>",
            "• Action: Inventory assets; establish multi-cloud governance.<br/>",
            "• Tools: Beginner—AWS Config. Advanced—ServiceNow GRC, AWS Organizations.<br/>",
            "• Example: Retailer used Config; bank standardized policies.<br/><br/>",
            "<b>Phase 2: Implementation (Domain 2, 3, 4):</b><br/>",
            "• Action: Deploy encryption, RBAC, DevSecOps.<br/>",
            "• Tools: Beginner—AWS KMS, Okta. Advanced—Vault, Istio, Snyk.<br/>",
            "• Example: Tech firm used Okta; fintech secured serverless.<br/><br/>",
            "<b>Phase 3: Operations (Domain 5):</b><br/>",
            "• Action: Automate monitoring, incident response.<br/>",
            "• Tools: Beginner—Splunk. Advanced—Cortex XSOAR, Sentinel.<br/>",
            "• Example: Healthcare used Splunk; enterprise reduced MTTD by 80%.",
        ),
    );
    record.visuals.push(callout(
        "Key Tools: CASB, CSPM, SOAR, GRC<br/>Goal: Compliant, Secure Operations",
        PaletteColor::Success,
    ));
    record
}

/// Stage outcomes for the case study, one value per stage plus the overall.
pub fn case_study_chart() -> BarChart {
    let series = |name: &str, values: [f64; 4]| Series {
        name: name.to_string(),
        values: values.to_vec(),
    };

    BarChart {
        title: "Case Study Outcomes by Stage".to_string(),
        categories: ["Planning", "Implementation", "Optimization", "Overall"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        series: vec![
            series("Compliance", [100.0, 90.0, 95.0, 100.0]),
            series("Attack Surface Reduction", [0.0, 90.0, 80.0, 90.0]),
            series("MTTD Reduction", [0.0, 0.0, 80.0, 80.0]),
            series("MTTR Improvement", [0.0, 0.0, 75.0, 75.0]),
        ],
        category_axis_title: "Stage".to_string(),
        value_axis_title: "Improvement (%)".to_string(),
        value_max: 100.0,
    }
}

fn case_study() -> SlideRecord {
    let mut record = slide(
        "Case Study: Multi-Cloud Financial Transformation",
        concat!(
            "Securing 300+ Apps Across AWS, Azure, GCP<br/><br/>",
            "<b>Context:</b> Global financial firm migrated 300+ apps to multi-cloud under SOX, PCI DSS, GDPR, CCPA.<br/><br/>",
            "<b>Stage 1: Planning (Domains 1, 6):</b><br/>",
            "• Requirements: 1M+ transactions; 100% visibility.<br/>",
            "• Risks: Basic—Shared responsibility (e.g., 2018 S3). Advanced—Governance (e.g., 2019 Capital One).<br/>",
            "• Security: Basic—Domain 1 matrix. Intermediate—AWS Config. Advanced—AWS Organizations, ServiceNow GRC.<br/>",
            "• Outcome: <b>100% visibility</b>; GDPR readiness.<br/>",
            "• Tools: AWS Config, Organizations, ServiceNow GRC.<br/><br/>",
            "<b>Stage 2: Implementation (Domains 2, 3, 4):</b><br/>",
            "• Requirements: Secure 1PB+ data, 200+ serverless apps; zero-trust.<br/>",
            "• Risks: Basic—S3 misconfigs (e.g., 2018 voter). Advanced—API gaps (e.g., 2020 Twilio).<br/>",
            "• Security: Basic—KMS, VPCs. Intermediate—Macie, API Gateway. Advanced—Vault, Istio, Snyk.<br/>",
            "• Outcome: <b>90% attack surface reduction</b>; zero-trust apps.<br/>",
            "• Tools: KMS, Macie, API Gateway, Vault, Istio, Snyk.<br/><br/>",
            "<b>Stage 3: Optimization (Domain 5):</b><br/>",
            "• Requirements: MTTD <24h, MTTR <12h; automate compliance.<br/>",
            "• Risks: Basic—Visibility (e.g., Target 2013). Advanced—APTs (e.g., 2021 SolarWinds).<br/>",
            "• Security: Basic—Splunk. Intermediate—Sentinel. Advanced—XSOAR.<br/>",
            "• Outcome: <b>MTTD <24h</b>; <b>75% MTTR improvement</b>.<br/>",
            "• Tools: Splunk, Sentinel, XSOAR.<br/><br/>",
            "<b>Results (All Domains):</b><br/>",
            "• Impact: Resilient, compliant multi-cloud architecture.",
        ),
    );
    record.visuals.push(VisualAttachment::BarChart(case_study_chart()));
    record.visuals.push(diagram(concat!(
        "[Multi-Cloud Architecture]<br/>",
        " | AWS (Config, KMS) |----| Azure (Sentinel, Policy) |----| GCP (RBAC, GRC) |<br/>",
        " | Stage 1: Governance|----| Stage 2: Zero-Trust |----| Stage 3: SOAR     |<br/>",
        " | Vault, Istio, Snyk |----| XSOAR, Compliance   |----| API Gateway       |<br/>",
        " | Domain 1,2,3,4,5,6 |",
    )));
    record
}

fn knowledge_check() -> SlideRecord {
    slide(
        "Test Your CCSP Knowledge",
        concat!(
            "<b>Question 1: Who secures data in AWS S3? (Domain 1)</b><br/>",
            "• Options: AWS Only, Customer, Both Equally<br/>",
            "• Correct: <b>Customer</b>. The customer secures S3 data.<br/><br/>",
            "<b>Question 2: Which tool supports Domain 5’s incident response?</b><br/>",
            "• Options: Palo Alto Cortex XSOAR, AWS KMS, OneTrust<br/>",
            "• Correct: <b>Cortex XSOAR</b> aligns with Domain 5 for automation.",
        ),
    )
}

fn actionable_steps() -> SlideRecord {
    slide(
        "Actionable Steps for Cloud Security",
        concat!(
            "Implement CCSP-Driven Security Today<br/><br/>",
            "<b>Beginner: Enable MFA (Domain 3):</b><br/>",
            "• Activate MFA on AWS IAM or Azure AD.<br/>",
            "• Action: Enable MFA for admin accounts.<br/>",
            "• Tool: AWS IAM, Okta.<br/><br/>",
            "<b>Beginner: Secure S3 Buckets (Domain 2):</b><br/>",
            "• Restrict public access to prevent leaks.<br/>",
            "• Action: Review S3 permissions.<br/>",
            "• Tool: AWS S3 Console.<br/><br/>",
            "<b>Intermediate: Deploy CSPM (Domain 5):</b><br/>",
            "• Monitor and fix misconfigurations.<br/>",
            "• Action: Set up AWS Config or Azure Security Center.<br/>",
            "• Tool: AWS Config, Azure Security Center.<br/><br/>",
            "<b>Intermediate: Monitor with SIEM (Domain 5):</b><br/>",
            "• Real-time threat detection.<br/>",
            "• Action: Configure Splunk for logs and alerts.<br/>",
            "• Tool: Splunk, Azure Sentinel.<br/><br/>",
            "<b>Advanced: Standardize Governance (Domain 1):</b><br/>",
            "• Consistent policies across clouds.<br/>",
            "• Action: Use AWS Organizations, ServiceNow GRC.<br/>",
            "• Tool: AWS Organizations, ServiceNow GRC.<br/><br/>",
            "<b>Advanced: Automate Incident Response (Domain 5):</b><br/>",
            "• Deploy SOAR for threat response.<br/>",
            "• Action: Integrate Cortex XSOAR with Sentinel.<br/>",
            "• Tool: Cortex XSOAR, Palo Alto Sentinel.",
        ),
    )
}

fn strategize_and_scale() -> SlideRecord {
    let mut record = slide(
        "Strategize and Scale with CCSP",
        concat!(
            "Next Steps for Cloud Security<br/><br/>",
            "<b>Domain 1:</b><br/>",
            "• Assess cloud models and governance (AWS Organizations).<br/><br/>",
            "<b>Domain 2–4:</b><br/>",
            "• Implement encryption (KMS, Vault), RBAC (Istio), DevSecOps (Snyk).<br/><br/>",
            "<b>Domain 5–6:</b><br/>",
            "• Automate monitoring (XSOAR, Splunk) and compliance (OneTrust).<br/><br/>",
            "<b>Action:</b><br/>",
            "• Enroll in CCSP training at <a href='http://www.isc2.org'>www.isc2.org</a>.<br/><br/>",
            "<b>Enhanced:</b> Resilience with CCSP<br/>",
            "<b>Unified:</b> Multi-cloud strategy",
        ),
    );
    record.visuals.push(callout(
        "Enhanced: Resilience with CCSP<br/>Unified: Multi-cloud strategy",
        PaletteColor::SecondaryAccent,
    ));
    record
}
