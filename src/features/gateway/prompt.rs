use crate::features::gateway::types::PlanRequest;

pub fn render_trip_prompt(plan: &PlanRequest) -> String {
    format!(
        "System:\n\
         You are a friendly but concise trip planner\n\
         User:\n\
         Plan a weekend trip for {} starting on {}\n\
         Budget: {} USD total\n\
         Travel Party: {} adults and {} children\n\
         Return only the itinerary - no extra commentary.\n",
        plan.destination, plan.date, plan.budget, plan.num_of_adults, plan.num_of_children
    )
}
