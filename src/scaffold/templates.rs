//! Handlebars sources for the generated project documents.

/// Template names as registered with the renderer
pub const INTENT: &str = "intent";
pub const IDEA: &str = "idea";
pub const TASK: &str = "task";
pub const SUBTASK: &str = "subtask";
pub const STRUCTURE: &str = "structure";

/// Registration table: (name, source)
pub const ALL: [(&str, &str); 5] = [
    (INTENT, INTENT_TEMPLATE),
    (IDEA, IDEA_TEMPLATE),
    (TASK, TASK_TEMPLATE),
    (SUBTASK, SUBTASK_TEMPLATE),
    (STRUCTURE, STRUCTURE_TEMPLATE),
];

const INTENT_TEMPLATE: &str = r#"# Project Intent: {{name}}

## Vision

[What transformation are you trying to achieve? What does success look like?]

## Core Values

- **[Value 1]**: [Why it matters]
- **[Value 2]**: [Why it matters]

## Constraints

- **Time**: [Deadline or ongoing]
- **Resources**: [Budget, team, tools]
- **Scope**: [Boundaries, what's excluded]

## Success Metrics

- [ ] [Quantifiable outcome 1]
- [ ] [Qualitative outcome 2]

## Context

[Background, current state, relevant history]

## Decision Log

- {{date}}: Project initialized
"#;

const IDEA_TEMPLATE: &str = r#"# Idea: {{title}}

## Concept

[One paragraph description of this specific approach]

## Why This Approach

- Aligns with [value] because...
- Solves [problem] by...
- Fits within [constraint] via...

## Key Components

1. **[Component]**: [Purpose and description]
2. **[Component]**: [Purpose and description]

## Dependencies

- **Requires**: [Prerequisites, resources]
- **Assumes**: [Conditions that must be true]

## Risk Assessment

- **Primary risk**: [What could derail this]
- **Mitigation**: [How to prevent/handle]

## Next Steps

- [ ] Define [component] implementation
- [ ] Research [unknown area]
- [ ] Prototype [risky element]
"#;

const TASK_TEMPLATE: &str = r#"# Task: {{title}}

## Objective

[Single sentence describing what this task accomplishes]

## Acceptance Criteria

- [ ] Given [context], when [action], then [outcome]
- [ ] [Specific measurable result]

## Implementation Approach

[Paragraph describing the technical/practical approach]

## Dependencies

- **Blocked by**: [Previous tasks]
- **Blocks**: [Future tasks]
- **Requires**: [Resources, knowledge, tools]

## Estimated Effort

[Time estimate or complexity rating]

## Subtasks

1. [ ] [Atomic action 1]
2. [ ] [Atomic action 2]

## Notes

[Design decisions, alternatives considered, rationale]
"#;

const SUBTASK_TEMPLATE: &str = r#"# Subtask: {{title}}

## Goal

[What this subtask accomplishes]

## Implementation

[Specific steps or code]

## Test Case

[How to verify completion]
"#;

const STRUCTURE_TEMPLATE: &str = r#"{{name}}/
├── INTENT.md
└── ideas/
    └── example-idea/
        ├── IDEA.md
        └── tasks/
            └── example-task/
                ├── TASK.md
                └── subtasks/
                    └── subtask-1.md
"#;
