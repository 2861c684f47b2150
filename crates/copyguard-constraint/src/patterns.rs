//! Static pattern libraries
//!
//! Every check is driven by one of these tables. Regex entries are written
//! lowercase and compiled case-insensitively; plain vocabulary entries are
//! matched on word boundaries.

/// An unsupported absolute or superlative claim
#[derive(Debug)]
pub struct ClaimPattern {
    pub pattern: &'static str,
    pub description: &'static str,
    /// The claim stands when the context states the same figure
    pub groundable: bool,
}

/// A website-audit / CRO term and the label it is known by
#[derive(Debug)]
pub struct LabeledPattern {
    pub pattern: &'static str,
    pub label: &'static str,
}

/// A phrase that signals a specific industry
#[derive(Debug)]
pub struct DomainIndicator {
    pub pattern: &'static str,
    pub domain: &'static str,
}

/// A term that drifts away from the business's actual product category
#[derive(Debug)]
pub struct DriftPattern {
    pub pattern: &'static str,
    pub description: &'static str,
}

/// Fires only when the context looks like `context_indicators` describe it
#[derive(Debug)]
pub struct DriftRule {
    pub id: &'static str,
    pub context_indicators: &'static [&'static str],
    pub drift: &'static [DriftPattern],
}

/// How a context field signals that a limit applies
#[derive(Debug)]
pub enum LimitSignal {
    /// Any of `words` appears as a whole word, or the stated amount is at most `at_most`
    SmallAmount {
        words: &'static [&'static str],
        at_most: f64,
    },
    /// The value contains a positive amount
    AnyAmount,
    /// Any of the words appears as a whole word
    Mentions(&'static [&'static str]),
}

/// Claims that contradict a limit recorded in context
#[derive(Debug)]
pub struct ConstraintRule {
    pub id: &'static str,
    /// The field path must contain one of these
    pub field_keywords: &'static [&'static str],
    /// ...and, when non-empty, one of these too
    pub field_requires: &'static [&'static str],
    /// ...and none of these
    pub field_excludes: &'static [&'static str],
    pub signal: LimitSignal,
    pub claims: &'static [&'static str],
    pub reason: &'static str,
}

pub static INVENTED_CLAIM_PATTERNS: &[ClaimPattern] = &[
    ClaimPattern {
        pattern: r"\bproprietary (?:technology|tech|algorithms?|methods?|systems?|process(?:es)?|formula)\b",
        description: "proprietary technology claim",
        groundable: false,
    },
    ClaimPattern {
        pattern: r"\bguaranteed? (?:results|roi|success|growth|returns|sales|leads|rankings?)\b",
        description: "guaranteed outcome",
        groundable: false,
    },
    ClaimPattern {
        pattern: r"\b(?:100|110)% (?:guaranteed|satisfaction|success)\b",
        description: "absolute guarantee",
        groundable: false,
    },
    ClaimPattern {
        pattern: r"\b\d+(?:\.\d+)?% (?:increase|growth|improvement|more|boost|reduction|lift|higher|faster)\b",
        description: "unattributed percentage improvement",
        groundable: false,
    },
    ClaimPattern {
        pattern: r"\$\d[\d,]*(?:\.\d+)?(?:\s?(?:k|m|million|billion))?\b",
        description: "specific dollar amount",
        groundable: true,
    },
    ClaimPattern {
        pattern: r"(?:#1\b|\bnumber one\b|\bno\. 1\b)",
        description: "ranking claim",
        groundable: false,
    },
    ClaimPattern {
        pattern: r"\baward[- ]winning\b",
        description: "award claim",
        groundable: false,
    },
    ClaimPattern {
        pattern: r"\b(?:industry|market)[- ]leading\b",
        description: "market leadership claim",
        groundable: false,
    },
    ClaimPattern {
        pattern: r"\btrusted by (?:thousands|millions|hundreds|\d[\d,]*\+?)\b",
        description: "social proof without a source",
        groundable: false,
    },
    ClaimPattern {
        pattern: r"\b(?:clinically|scientifically) proven\b",
        description: "proof claim",
        groundable: false,
    },
    ClaimPattern {
        pattern: r"\bpatent(?:ed|-pending)\b",
        description: "patent claim",
        groundable: false,
    },
    ClaimPattern {
        pattern: r"\b\d[\d,]*\+? (?:happy )?(?:customers|clients|users|businesses|companies)\b",
        description: "customer count",
        groundable: true,
    },
];

pub static FLUFF_PHRASES: &[&str] = &[
    "leverage",
    "leveraging",
    "synergy",
    "synergies",
    "best-in-class",
    "world-class",
    "cutting-edge",
    "state-of-the-art",
    "seamless",
    "seamlessly",
    "game-changing",
    "game-changer",
    "revolutionary",
    "revolutionize",
    "innovative",
    "next-generation",
    "next-level",
    "robust",
    "holistic",
    "unparalleled",
    "unlock your potential",
    "empower",
    "empowering",
    "supercharge",
    "turnkey",
    "paradigm shift",
    "disruptive",
    "one-stop shop",
    "end-to-end",
    "take it to the next level",
];

/// Generic engagement talk, only checked when the business has no definition yet
pub static ENGAGEMENT_PATTERNS: &[&str] = &[
    r"\bcustomer engagement\b",
    r"\bdrive engagement\b",
    r"\bboost(?:ing)? engagement\b",
    r"\bincrease(?:d)? engagement\b",
    r"\bbrand engagement\b",
    r"\bengagement (?:rates?|metrics)\b",
];

/// Product, tool and mechanism vocabulary
pub static MECHANISM_TERMS: &[&str] = &[
    "platform",
    "dashboard",
    "analytics",
    "automation",
    "automated",
    "integration",
    "integrations",
    "software",
    "saas",
    "app",
    "api",
    "plugin",
    "toolkit",
    "portal",
    "chatbot",
    "crm",
    "workflow",
    "ai-powered",
    "algorithm",
    "machine learning",
];

pub static CRO_PATTERNS: &[LabeledPattern] = &[
    LabeledPattern {
        pattern: r"\bcro\b",
        label: "conversion rate optimization",
    },
    LabeledPattern {
        pattern: r"\bconversion rate optimi[sz]ation\b",
        label: "conversion rate optimization",
    },
    LabeledPattern {
        pattern: r"\bbounce rates?\b",
        label: "bounce rate",
    },
    LabeledPattern {
        pattern: r"\ba/b test(?:ing|s)?\b",
        label: "a/b testing",
    },
    LabeledPattern {
        pattern: r"\bsplit test(?:ing|s)?\b",
        label: "a/b testing",
    },
    LabeledPattern {
        pattern: r"\bcore web vitals\b",
        label: "core web vitals",
    },
    LabeledPattern {
        pattern: r"\bpage (?:speed|load times?)\b",
        label: "page speed",
    },
    LabeledPattern {
        pattern: r"\bheat ?maps?\b",
        label: "heatmaps",
    },
    LabeledPattern {
        pattern: r"\b(?:website|landing page|site) audits?\b",
        label: "website audit",
    },
    LabeledPattern {
        pattern: r"\bfunnel (?:analysis|optimi[sz]ation)\b",
        label: "funnel optimization",
    },
    LabeledPattern {
        pattern: r"\bseo audits?\b",
        label: "seo audit",
    },
];

pub static DOMAIN_INDICATORS: &[DomainIndicator] = &[
    DomainIndicator { pattern: r"\bpatient outcomes\b", domain: "healthcare" },
    DomainIndicator { pattern: r"\bpatients?\b", domain: "healthcare" },
    DomainIndicator { pattern: r"\bclinical\b", domain: "healthcare" },
    DomainIndicator { pattern: r"\bhipaa\b", domain: "healthcare" },
    DomainIndicator { pattern: r"\btelehealth\b", domain: "healthcare" },
    DomainIndicator { pattern: r"\bwealth management\b", domain: "finance" },
    DomainIndicator { pattern: r"\bportfolio management\b", domain: "finance" },
    DomainIndicator { pattern: r"\binvestors?\b", domain: "finance" },
    DomainIndicator { pattern: r"\bfintech\b", domain: "finance" },
    DomainIndicator { pattern: r"\bloan approvals?\b", domain: "finance" },
    DomainIndicator { pattern: r"\bproperty listings?\b", domain: "real estate" },
    DomainIndicator { pattern: r"\bhome ?buyers?\b", domain: "real estate" },
    DomainIndicator { pattern: r"\brealtors?\b", domain: "real estate" },
    DomainIndicator { pattern: r"\bmortgages?\b", domain: "real estate" },
    DomainIndicator { pattern: r"\bonline stores?\b", domain: "e-commerce" },
    DomainIndicator { pattern: r"\bshopping carts?\b", domain: "e-commerce" },
    DomainIndicator { pattern: r"\bcart abandonment\b", domain: "e-commerce" },
    DomainIndicator { pattern: r"\bshopify\b", domain: "e-commerce" },
    DomainIndicator { pattern: r"\bstudents?\b", domain: "education" },
    DomainIndicator { pattern: r"\bcurriculum\b", domain: "education" },
    DomainIndicator { pattern: r"\bclassrooms?\b", domain: "education" },
    DomainIndicator { pattern: r"\blaw firms?\b", domain: "legal" },
    DomainIndicator { pattern: r"\battorneys?\b", domain: "legal" },
    DomainIndicator { pattern: r"\blitigation\b", domain: "legal" },
    DomainIndicator { pattern: r"\bhotel guests?\b", domain: "hospitality" },
    DomainIndicator { pattern: r"\broom bookings?\b", domain: "hospitality" },
];

pub static DRIFT_RULES: &[DriftRule] = &[
    DriftRule {
        id: "service_business_as_software",
        context_indicators: &[
            r"\bconsult(?:ing|ancy|ant)\b",
            r"\bagency\b",
            r"\bcoaching\b",
            r"\bfreelanc(?:e|er|ing)\b",
            r"\bdone[- ]for[- ]you\b",
        ],
        drift: &[
            DriftPattern {
                pattern: r"\b(?:software|saas)\b",
                description: "describes a service business as a software product",
            },
            DriftPattern {
                pattern: r"\bmobile app\b",
                description: "describes a service business as an app",
            },
            DriftPattern {
                pattern: r"\bself[- ]serve\b",
                description: "describes a hands-on service as self-serve",
            },
        ],
    },
    DriftRule {
        id: "physical_goods_as_digital",
        context_indicators: &[
            r"\bhandmade\b",
            r"\bbaker(?:y|ies)\b",
            r"\bcafe\b",
            r"\brestaurant\b",
            r"\bboutique\b",
            r"\bphysical products?\b",
        ],
        drift: &[
            DriftPattern {
                pattern: r"\bsubscriptions?\b",
                description: "introduces a subscription model for physical goods",
            },
            DriftPattern {
                pattern: r"\bdownloadable\b",
                description: "describes physical goods as downloadable",
            },
            DriftPattern {
                pattern: r"\bonline courses?\b",
                description: "introduces online courses",
            },
        ],
    },
    DriftRule {
        id: "local_business_scale",
        context_indicators: &[
            r"\blocal\b",
            r"\bneighbou?rhood\b",
            r"\bfamily[- ]owned\b",
            r"\bsingle location\b",
        ],
        drift: &[
            DriftPattern {
                pattern: r"\bglobal(?:ly)?\b",
                description: "claims global reach for a local business",
            },
            DriftPattern {
                pattern: r"\bnationwide\b",
                description: "claims nationwide presence for a local business",
            },
            DriftPattern {
                pattern: r"\bworldwide\b",
                description: "claims worldwide presence for a local business",
            },
        ],
    },
];

pub static CONSTRAINT_RULES: &[ConstraintRule] = &[
    ConstraintRule {
        id: "budget_cap",
        field_keywords: &["budget"],
        field_requires: &[],
        field_excludes: &["min", "floor"],
        signal: LimitSignal::SmallAmount {
            words: &[
                "small", "limited", "tight", "low", "minimal", "bootstrap", "bootstrapped", "shoestring",
                "modest",
            ],
            at_most: 10_000.0,
        },
        claims: &[
            r"\benterprise(?:[- ](?:grade|level|scale|class))?\b",
            r"\bunlimited\b",
            r"\bfortune 500\b",
            r"\bwhite[- ]glove\b",
            r"\bdedicated account (?:manager|team)\b",
        ],
        reason: "claims exceed the limited budget",
    },
    ConstraintRule {
        id: "price_floor",
        field_keywords: &["floor", "minimum", "min_", ".min"],
        field_requires: &["price", "budget", "rate", "fee"],
        field_excludes: &[],
        signal: LimitSignal::AnyAmount,
        claims: &[
            r"\bfor free\b",
            r"\bfree of charge\b",
            r"\b(?:at )?no cost\b",
            r"\bzero cost\b",
            r"\bcheapest\b",
            r"\blowest prices?\b",
            r"\bbudget[- ]friendly\b",
        ],
        reason: "pricing claim contradicts the price floor",
    },
    ConstraintRule {
        id: "team_capacity",
        field_keywords: &["team_size", "team.size", "headcount", "staff", "employees", "resources"],
        field_requires: &[],
        field_excludes: &[],
        signal: LimitSignal::SmallAmount {
            words: &["solo", "one-person", "one person", "just me", "small", "limited", "part-time"],
            at_most: 5.0,
        },
        claims: &[
            r"\blarge team\b",
            r"\bteam of (?:experts|specialists|professionals)\b",
            r"\b24/7\b",
            r"\baround[- ]the[- ]clock\b",
            r"\bglobal team\b",
            r"\bhundreds of (?:experts|staff|employees)\b",
        ],
        reason: "claims exceed the available team",
    },
    ConstraintRule {
        id: "timeline",
        field_keywords: &["timeline", "turnaround", "lead_time", "delivery_time"],
        field_requires: &[],
        field_excludes: &[],
        signal: LimitSignal::Mentions(&["week", "weeks", "month", "months"]),
        claims: &[
            r"\bsame[- ]day\b",
            r"\bovernight\b",
            r"\binstant(?:ly)?\b",
            r"\bwithin (?:hours|minutes)\b",
            r"\bin minutes\b",
        ],
        reason: "speed claim contradicts the stated timeline",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn all_regexes() -> Vec<&'static str> {
        let mut out: Vec<&'static str> = Vec::new();
        out.extend(INVENTED_CLAIM_PATTERNS.iter().map(|p| p.pattern));
        out.extend(ENGAGEMENT_PATTERNS.iter().copied());
        out.extend(CRO_PATTERNS.iter().map(|p| p.pattern));
        out.extend(DOMAIN_INDICATORS.iter().map(|p| p.pattern));
        for rule in DRIFT_RULES {
            out.extend(rule.context_indicators.iter().copied());
            out.extend(rule.drift.iter().map(|d| d.pattern));
        }
        for rule in CONSTRAINT_RULES {
            out.extend(rule.claims.iter().copied());
        }
        out
    }

    #[test]
    fn test_all_patterns_compile() {
        for pattern in all_regexes() {
            assert!(Regex::new(pattern).is_ok(), "bad pattern: {pattern}");
        }
    }

    #[test]
    fn test_vocabulary_is_lowercase() {
        for term in FLUFF_PHRASES.iter().chain(MECHANISM_TERMS.iter()) {
            assert_eq!(*term, term.to_lowercase());
        }
        for p in CRO_PATTERNS {
            assert_eq!(p.label, p.label.to_lowercase());
        }
    }

    #[test]
    fn test_rule_ids_unique() {
        let mut ids: Vec<&str> = DRIFT_RULES
            .iter()
            .map(|r| r.id)
            .chain(CONSTRAINT_RULES.iter().map(|r| r.id))
            .collect();
        let before = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_every_drift_rule_has_patterns() {
        for rule in DRIFT_RULES {
            assert!(!rule.context_indicators.is_empty(), "{}", rule.id);
            assert!(!rule.drift.is_empty(), "{}", rule.id);
        }
    }
}
