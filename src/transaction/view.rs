use maud::{Markup, html};

use crate::{
    category::CategoryStore,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_EDIT_STYLE, BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE,
        FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, SECTION_HEADING_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency,
    },
    transaction::{TransactionStore, TransactionType},
};

/// The transaction form. Category options come from `categories`.
pub fn transaction_form_view(store: &TransactionStore, categories: &CategoryStore) -> Markup {
    let editing = store.mode.target();
    let create_endpoint = editing.is_none().then_some(endpoints::TRANSACTIONS);
    let update_endpoint =
        editing.map(|transaction| format_endpoint(endpoints::TRANSACTION, transaction.id));
    let form = &store.form;

    html! {
        section id="transaction-editor" class=(FORM_CONTAINER_STYLE)
        {
            h2 class=(SECTION_HEADING_STYLE)
            {
                @if editing.is_some() { "Edit Transaction" } @else { "Add New Transaction" }
            }

            form
                id="transaction-form"
                hx-post=[create_endpoint]
                hx-put=[update_endpoint]
                hx-target="#tracker"
                hx-swap="outerHTML"
                class="w-full space-y-4"
            {
                div
                {
                    label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                    input
                        id="amount"
                        type="number"
                        name="amount"
                        step="0.01"
                        placeholder="Amount"
                        value=(form.amount)
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="type" class=(FORM_LABEL_STYLE) { "Type" }

                    select id="type" name="type" class=(FORM_TEXT_INPUT_STYLE)
                    {
                        @for type_ in [TransactionType::Expense, TransactionType::Income] {
                            option value=(type_) selected[form.type_ == type_]
                            {
                                @match type_ {
                                    TransactionType::Expense => { "Expense" }
                                    TransactionType::Income => { "Income" }
                                }
                            }
                        }
                    }
                }

                div
                {
                    label for="category_id" class=(FORM_LABEL_STYLE) { "Category" }

                    select
                        id="category_id"
                        name="category_id"
                        required
                        class=(FORM_TEXT_INPUT_STYLE)
                    {
                        option value="" selected[form.category_id.is_empty()] { "Select Category" }

                        @for category in &categories.items {
                            option
                                value=(category.id)
                                selected[form.category_id == category.id.to_string()]
                            {
                                (category.name)
                            }
                        }
                    }
                }

                div
                {
                    label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                    input
                        id="description"
                        type="text"
                        name="description"
                        placeholder="Description (Optional)"
                        value=(form.description)
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                @if editing.is_some() {
                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Update Transaction" }

                    button
                        type="button"
                        hx-post=(endpoints::CANCEL_TRANSACTION_EDIT)
                        hx-target="#tracker"
                        hx-swap="outerHTML"
                        class=(BUTTON_SECONDARY_STYLE)
                    {
                        "Cancel Edit"
                    }
                } @else {
                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Transaction" }
                }
            }
        }
    }
}

/// The table of loaded transactions, naming each transaction's category.
pub fn transaction_list_view(store: &TransactionStore, categories: &CategoryStore) -> Markup {
    html! {
        section id="transactions" class="w-full max-w-4xl space-y-4"
        {
            h2 class=(SECTION_HEADING_STYLE) { "Your Transactions" }

            @if store.items.is_empty() {
                p id="no-transactions" { "No transactions yet. Add some!" }
            } @else {
                div class="relative overflow-x-auto shadow-md rounded"
                {
                    table
                        id="transaction-list"
                        class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody
                        {
                            @for transaction in &store.items {
                                tr data-transaction-id=(transaction.id) class=(TABLE_ROW_STYLE)
                                {
                                    td class=(TABLE_CELL_STYLE) { (format_currency(transaction.amount)) }
                                    td class=(TABLE_CELL_STYLE) { (transaction.type_) }
                                    td class=(TABLE_CELL_STYLE) { (categories.name_of(transaction.category_id)) }
                                    td class=(TABLE_CELL_STYLE) { (transaction.transaction_date.display_date()) }
                                    td class=(TABLE_CELL_STYLE)
                                    {
                                        (transaction
                                            .description
                                            .as_deref()
                                            .filter(|description| !description.is_empty())
                                            .unwrap_or("N/A"))
                                    }
                                    td class=(TABLE_CELL_STYLE)
                                    {
                                        div class="flex gap-4"
                                        {
                                            button
                                                type="button"
                                                hx-post=(format_endpoint(endpoints::EDIT_TRANSACTION, transaction.id))
                                                hx-target="#tracker"
                                                hx-swap="outerHTML"
                                                class=(BUTTON_EDIT_STYLE)
                                            {
                                                "Edit"
                                            }

                                            button
                                                type="button"
                                                hx-delete=(format_endpoint(endpoints::TRANSACTION, transaction.id))
                                                hx-confirm="Are you sure you want to delete this transaction?"
                                                hx-target="#tracker"
                                                hx-swap="outerHTML"
                                                class=(BUTTON_DELETE_STYLE)
                                            {
                                                "Delete"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
