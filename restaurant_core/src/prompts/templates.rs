pub const SOCIAL_MEDIA_SYSTEM: &str =
    "Du bist ein Experte für Restaurant-Marketing und Social Media Content.";
pub const NEWSLETTER_SYSTEM: &str =
    "Du bist ein Experte für Restaurant-Newsletter und E-Mail-Marketing.";
pub const MENU_SYSTEM: &str = "Du bist ein Experte für Menü-Beschreibungen und Food-Marketing.";
pub const REVIEW_SYSTEM: &str = "Du bist ein Experte für Kundenservice und Review-Management.";

pub const CONNECTION_TEST_PROMPT: &str = "Sage 'Hallo' auf Deutsch.";

pub const SOCIAL_MEDIA_DE: &str = "\
Erstelle einen ansprechenden Social Media Post für {{restaurant_name}}, ein {{cuisine_type}} Restaurant.

Details:
- Plattform: {{platform}}
- Anlass: {{occasion}}
- Besonderes Gericht: {{special_dish}}

Der Post soll:
- Appetitlich und einladend sein
- Lokale SEO-Keywords enthalten
- Call-to-Action haben
- Emojis verwenden
- Maximal 280 Zeichen für Twitter, 500 für Facebook/Instagram

Erstelle nur den Text, keine Hashtags separat.";

pub const SOCIAL_MEDIA_EN: &str = "\
Create an engaging social media post for {{restaurant_name}}, a {{cuisine_type}} restaurant.

Details:
- Platform: {{platform}}
- Occasion: {{occasion}}
- Special dish: {{special_dish}}

The post should:
- Be appetizing and inviting
- Include local SEO keywords
- Have a call-to-action
- Use emojis
- Max 280 chars for Twitter, 500 for Facebook/Instagram

Create only the text, no separate hashtags.";

pub const NEWSLETTER_DE: &str = "\
Erstelle einen Newsletter für {{restaurant_name}}, ein {{cuisine_type}} Restaurant.

Inhalte:
- Events: {{events}}
- Specials: {{specials}}

Der Newsletter soll:
- Persönlich und warm sein
- Betreffzeile enthalten
- 3-4 Abschnitte haben
- Call-to-Action für Reservierung
- Maximal 800 Wörter

Format: JSON mit 'subject' und 'content' Feldern.";

pub const NEWSLETTER_EN: &str = "\
Create a newsletter for {{restaurant_name}}, a {{cuisine_type}} restaurant.

Content:
- Events: {{events}}
- Specials: {{specials}}

The newsletter should:
- Be personal and warm
- Include subject line
- Have 3-4 sections
- Call-to-action for reservations
- Max 800 words

Format: JSON with 'subject' and 'content' fields.";

pub const MENU_DE: &str = "\
Erstelle eine appetitliche Menü-Beschreibung für:

Gericht: {{dish_name}}
Zutaten: {{ingredients}}
Preis: {{price}}
Küche: {{cuisine_type}}

Die Beschreibung soll:
- Appetitlich und verlockend sein
- Zutaten hervorheben
- Zubereitungsart erwähnen
- Allergen-Hinweise enthalten (falls relevant)
- Maximal 150 Wörter
- Verkaufsfördernd wirken";

pub const MENU_EN: &str = "\
Create an appetizing menu description for:

Dish: {{dish_name}}
Ingredients: {{ingredients}}
Price: {{price}}
Cuisine: {{cuisine_type}}

The description should:
- Be appetizing and enticing
- Highlight ingredients
- Mention preparation method
- Include allergen notes (if relevant)
- Max 150 words
- Be sales-promoting";

pub const REVIEW_DE: &str = "\
Erstelle eine professionelle Antwort auf diese Kundenbewertung für {{restaurant_name}}:

Bewertung: {{rating}}/5 Sterne
Text: \"{{review_text}}\"

Die Antwort soll:
- Höflich und professionell sein
- Dankbarkeit zeigen
- Bei negativen Bewertungen Verbesserung anbieten
- Bei positiven Bewertungen Freude ausdrücken
- Maximal 200 Wörter
- Einladung für zukünftige Besuche";

pub const REVIEW_EN: &str = "\
Create a professional response to this customer review for {{restaurant_name}}:

Rating: {{rating}}/5 stars
Text: \"{{review_text}}\"

The response should:
- Be polite and professional
- Show gratitude
- Offer improvement for negative reviews
- Express joy for positive reviews
- Max 200 words
- Invite for future visits";
